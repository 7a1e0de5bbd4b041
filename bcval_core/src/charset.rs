use std::ops::RangeInclusive;

use bitvec::{array::BitArray, order::Lsb0, BitArr};

type AsciiBits = BitArr!(for 128, in u32, Lsb0);

/// Set of ASCII characters, stored as a bitset indexed by code point.
#[derive(Clone, Copy)]
pub struct AsciiSet {
    bits: AsciiBits,
}

impl AsciiSet {
    /// Construct an empty set.
    pub fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Construct the set of the ASCII characters in `chars`. Non-ASCII characters are ignored.
    /// # Example
    /// ```
    /// use bcval_core::AsciiSet;
    /// let set = AsciiSet::from_chars("-.$");
    /// assert!(set.contains('$'));
    /// assert!(!set.contains('+'));
    /// ```
    pub fn from_chars(chars: &str) -> Self {
        Self::new().with_chars(chars)
    }

    /// Add every ASCII character in `chars`.
    pub fn with_chars(mut self, chars: &str) -> Self {
        for c in chars.chars().filter(char::is_ascii) {
            self.bits.set(c as usize, true);
        }
        self
    }

    /// Add every character in the inclusive byte `range`. Bytes above 0x7F are ignored.
    pub fn with_range(mut self, range: RangeInclusive<u8>) -> Self {
        for byte in range.filter(u8::is_ascii) {
            self.bits.set(byte as usize, true);
        }
        self
    }

    /// Remove every character in `chars`.
    pub fn without_chars(mut self, chars: &str) -> Self {
        for c in chars.chars().filter(char::is_ascii) {
            self.bits.set(c as usize, false);
        }
        self
    }

    /// Determine whether `c` belongs to the set.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.bits[c as usize]
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl Default for AsciiSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AsciiSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars: String = self.bits.iter_ones().map(|i| i as u8 as char).collect();
        write!(f, "AsciiSet({:?})", chars)
    }
}

/// Closed class of characters a symbology can encode.
#[derive(Debug, Clone, Copy)]
pub enum Charset {
    /// Any Unicode scalar value. Size bounds are left to the caller.
    Any,
    /// Only the characters of the given ASCII set.
    Ascii(AsciiSet),
}

impl Charset {
    /// Digits `0`-`9`.
    pub fn digits() -> Self {
        Self::digits_with("")
    }

    /// Digits `0`-`9` plus the `extra` symbols.
    pub fn digits_with(extra: &str) -> Self {
        Self::Ascii(AsciiSet::new().with_range(b'0'..=b'9').with_chars(extra))
    }

    /// Digits `0`-`9`, uppercase letters `A`-`Z` plus the `extra` symbols.
    /// # Example
    /// ```
    /// use bcval_core::Charset;
    /// let code39 = Charset::upper_alnum_with("-.$/+% ");
    /// assert!(code39.accepts("1-A $2/B+3%C4D5G"));
    /// assert!(!code39.accepts("123a45"));
    /// ```
    pub fn upper_alnum_with(extra: &str) -> Self {
        Self::Ascii(
            AsciiSet::new()
                .with_range(b'0'..=b'9')
                .with_range(b'A'..=b'Z')
                .with_chars(extra),
        )
    }

    /// Characters typeable on a standard keyboard (printable ASCII, space included) minus `excluded`.
    /// # Example
    /// ```
    /// use bcval_core::Charset;
    /// let keyboard = Charset::printable_ascii_excluding("");
    /// assert!(keyboard.accepts("1-A$2/B+3%C4=D5Ga~"));
    /// assert!(!keyboard.accepts("1-A$2/B+3%C4=D5G〜"));
    /// ```
    pub fn printable_ascii_excluding(excluded: &str) -> Self {
        Self::Ascii(AsciiSet::new().with_range(b' '..=b'~').without_chars(excluded))
    }

    /// Determine whether `c` belongs to the charset.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Ascii(set) => set.contains(c),
        }
    }

    /// Find the first character of `s` outside the charset, returning its char index and the character itself.
    pub fn find_invalid(&self, s: &str) -> Option<(usize, char)> {
        match self {
            Self::Any => None,
            Self::Ascii(set) => s.chars().enumerate().find(|&(_, c)| !set.contains(c)),
        }
    }

    /// Determine whether every character of `s` belongs to the charset. The empty string is trivially accepted.
    pub fn accepts(&self, s: &str) -> bool {
        self.find_invalid(s).is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ascii_set_building() {
        let set = AsciiSet::new().with_range(b'a'..=b'c').with_chars("xy").without_chars("b");
        assert_eq!(set.len(), 4);
        assert!(set.contains('a'));
        assert!(!set.contains('b'));
        assert!(set.contains('y'));
        assert!(!AsciiSet::default().contains('a'));
        assert!(AsciiSet::default().is_empty());
    }

    #[test]
    fn test_ascii_set_ignores_non_ascii() {
        let set = AsciiSet::from_chars("aé〜");
        assert_eq!(set.len(), 1);
        assert!(!set.contains('é'));
        assert!(!set.contains('〜'));
        let set = AsciiSet::new().with_range(0x7e..=0xff);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_digits() {
        let digits = Charset::digits();
        assert!(digits.accepts("0123456789"));
        assert_eq!(digits.find_invalid("11111a111111"), Some((5, 'a')));
        assert_eq!(digits.find_invalid("１"), Some((0, '１')));
    }

    #[test]
    fn test_digits_with_symbols() {
        let codabar = Charset::digits_with("-.$:/+");
        assert!(codabar.accepts("$2/+345"));
        assert!(!codabar.accepts("12a45"));
        assert!(!codabar.accepts("12A45"));
    }

    #[test]
    fn test_printable_ascii_exclusion() {
        let charset = Charset::printable_ascii_excluding("~");
        assert!(charset.accepts("abc XYZ"));
        assert_eq!(charset.find_invalid("ab~"), Some((2, '~')));
        assert!(!charset.accepts("tab\there"));
        assert!(!charset.accepts("ひらがな"));
    }

    #[test]
    fn test_any() {
        assert!(Charset::Any.accepts("漢字を含む文字列"));
        assert!(Charset::Any.accepts(""));
        assert!(Charset::Any.contains('\u{0}'));
    }
}
