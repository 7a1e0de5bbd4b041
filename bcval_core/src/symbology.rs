use std::str::FromStr;

/// Barcode symbology known to the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SymbologyTag {
    /// QR code, free-form text.
    QrCode,
    /// Japan Post customer barcode.
    JapanPost,
    /// EAN-13 (JAN standard type).
    Ean13,
    /// EAN-8 (JAN short type).
    Ean8,
    /// Code 39.
    Code39,
    /// Code 128.
    Code128,
    /// NW-7, also known as Codabar.
    Nw7,
    /// ITF-14.
    Itf14,
    /// UPC-A.
    UpcA,
    /// UPC-E.
    UpcE,
    /// GS1 DataMatrix.
    Gs1DataMatrix,
    /// PDF417.
    Pdf417,
}

pub const NUM_SYMBOLOGIES: usize = 12;

impl SymbologyTag {
    /// Every symbology of the catalog.
    #[rustfmt::skip]
    pub const ALL: [SymbologyTag; NUM_SYMBOLOGIES] = [
        Self::QrCode, Self::JapanPost, Self::Ean13, Self::Ean8, Self::Code39, Self::Code128,
        Self::Nw7, Self::Itf14, Self::UpcA, Self::UpcE, Self::Gs1DataMatrix, Self::Pdf417,
    ];

    /// Look up a symbology by its tag name. Names are case sensitive.
    /// # Example
    /// ```
    /// use bcval_core::SymbologyTag;
    /// assert_eq!(SymbologyTag::from_name("ean13"), Some(SymbologyTag::Ean13));
    /// assert_eq!(SymbologyTag::from_name("EAN13"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// Get the tag name.
    /// # Example
    /// ```
    /// use bcval_core::SymbologyTag;
    /// assert_eq!(SymbologyTag::Gs1DataMatrix.name(), "gs1datamatrix");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Self::QrCode => "qrcode",
            Self::JapanPost => "japanpost",
            Self::Ean13 => "ean13",
            Self::Ean8 => "ean8",
            Self::Code39 => "code39",
            Self::Code128 => "code128",
            Self::Nw7 => "nw7",
            Self::Itf14 => "itf14",
            Self::UpcA => "upca",
            Self::UpcE => "upce",
            Self::Gs1DataMatrix => "gs1datamatrix",
            Self::Pdf417 => "pdf417",
        }
    }

    /// Get the identifier the rendering engine uses for this symbology. Codabar is the only renamed one.
    /// # Example
    /// ```
    /// use bcval_core::SymbologyTag;
    /// assert_eq!(SymbologyTag::Nw7.render_id(), "rationalizedCodabar");
    /// assert_eq!(SymbologyTag::UpcE.render_id(), "upce");
    /// ```
    pub const fn render_id(self) -> &'static str {
        match self {
            Self::Nw7 => "rationalizedCodabar",
            other => other.name(),
        }
    }

    /// Position of the symbology inside [SymbologyTag::ALL].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SymbologyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbologyTag {
    type Err = UnknownSymbology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownSymbology(s.to_owned()))
    }
}

impl TryFrom<&str> for SymbologyTag {
    type Error = UnknownSymbology;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A tag name outside the catalog was requested. This is a caller error, not a rejected payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symbology '{0}'")]
pub struct UnknownSymbology(pub String);

/// Map a tag name to the rendering engine identifier.
/// # Example
/// ```
/// use bcval_core::map_symbology_id_str;
/// assert_eq!(map_symbology_id_str("nw7").unwrap(), "rationalizedCodabar");
/// assert!(map_symbology_id_str("aztec").is_err());
/// ```
pub fn map_symbology_id_str(name: &str) -> Result<&'static str, UnknownSymbology> {
    Ok(name.parse::<SymbologyTag>()?.render_id())
}

/// Table mapping each [SymbologyTag] to a value of generic type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct SymbologyTable<T> {
    data: [T; NUM_SYMBOLOGIES],
}

impl<T> SymbologyTable<T> {
    /// Build the table by calling `f` once per symbology.
    pub fn from_fn<F: FnMut(SymbologyTag) -> T>(mut f: F) -> Self {
        Self {
            data: std::array::from_fn(|i| f(SymbologyTag::ALL[i])),
        }
    }

    /// Iterate over every entry along with its symbology.
    pub fn iter(&self) -> impl Iterator<Item = (SymbologyTag, &T)> {
        SymbologyTag::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SymbologyTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        for (tag, value) in self.iter() {
            writeln!(f, "    {} => {:?},", tag, value)?;
        }
        writeln!(f, "}}")
    }
}

impl<T> From<[T; NUM_SYMBOLOGIES]> for SymbologyTable<T> {
    fn from(value: [T; NUM_SYMBOLOGIES]) -> Self {
        Self { data: value }
    }
}

impl<T> std::ops::Index<SymbologyTag> for SymbologyTable<T> {
    type Output = T;

    fn index(&self, index: SymbologyTag) -> &Self::Output {
        &self.data[index.index()]
    }
}

impl<T> std::ops::IndexMut<SymbologyTag> for SymbologyTable<T> {
    fn index_mut(&mut self, index: SymbologyTag) -> &mut Self::Output {
        &mut self.data[index.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, tag) in SymbologyTag::ALL.into_iter().enumerate() {
            assert_eq!(tag.index(), i);
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for tag in SymbologyTag::ALL {
            assert_eq!(tag.name().parse::<SymbologyTag>(), Ok(tag));
            assert_eq!(tag.to_string(), tag.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "codabar".parse::<SymbologyTag>().unwrap_err();
        assert_eq!(err, UnknownSymbology("codabar".to_owned()));
        assert_eq!(err.to_string(), "unknown symbology 'codabar'");
        assert!(SymbologyTag::try_from("").is_err());
    }

    #[test]
    fn test_render_id_is_identity_except_codabar() {
        for tag in SymbologyTag::ALL {
            match tag {
                SymbologyTag::Nw7 => assert_eq!(tag.render_id(), "rationalizedCodabar"),
                other => assert_eq!(other.render_id(), other.name()),
            }
        }
    }

    #[test]
    fn test_table_indexing() {
        let mut table = SymbologyTable::from_fn(|tag| tag.name().len());
        assert_eq!(table[SymbologyTag::Ean8], 4);
        table[SymbologyTag::Ean8] = 0;
        assert_eq!(table[SymbologyTag::Ean8], 0);
        assert_eq!(table.iter().count(), NUM_SYMBOLOGIES);
    }
}
