use std::ops::RangeInclusive;

use bcval_core::standard;
use bcval_core::{AsciiSet, Charset, SymbologyTable, SymbologyTag};

use crate::checksum::{digit_values, CheckDigit, Mod10};
use crate::gs1::Gs1Parser;
use crate::validate::{Limits, Rejection};

/// Accepted sizes of a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthBound {
    /// Character count must be one of the listed values.
    OneOf(Vec<usize>),
    /// Character count must lie in the range.
    Chars(RangeInclusive<usize>),
    /// UTF-8 byte count must lie in the range.
    Bytes(RangeInclusive<usize>),
}

impl LengthBound {
    fn check(&self, input: &str) -> Result<(), Rejection> {
        let (len, range) = match self {
            Self::OneOf(lengths) => {
                let len = input.chars().count();
                return if lengths.contains(&len) {
                    Ok(())
                } else {
                    Err(Rejection::Length { len })
                };
            }
            Self::Chars(range) => (input.chars().count(), range),
            Self::Bytes(range) => (input.len(), range),
        };
        if len < *range.start() {
            Err(Rejection::Length { len })
        } else if len > *range.end() {
            Err(Rejection::Capacity {
                size: len,
                capacity: *range.end(),
            })
        } else {
            Ok(())
        }
    }
}

/// Check applied once the characters and the length of a payload are known to be acceptable.
#[derive(Debug, Clone)]
pub enum Check {
    /// Nothing else to verify.
    None,
    /// The payload is `base_len` digits with the check digit omitted, or `base_len + 1` digits ending with a valid
    /// check digit.
    CheckDigit { algorithm: Mod10, base_len: usize },
    /// Japan Post customer barcode: postal code digits, then hyphen separated address segments fitting in `slots`.
    JapanPost { slots: usize },
    /// Codabar start and stop characters around the data characters.
    Codabar { start_stop: AsciiSet, data: Charset },
    /// GS1 application identifier structure.
    Gs1(Gs1Parser),
}

impl Check {
    fn apply(&self, input: &str) -> Result<(), Rejection> {
        match self {
            Self::None => Ok(()),
            Self::CheckDigit {
                algorithm,
                base_len,
            } => {
                let digits = digit_values(input).ok_or(Rejection::Malformed("non-digit in numeric code"))?;
                if digits.len() > *base_len {
                    algorithm.check(&digits)?;
                }
                Ok(())
            }
            Self::JapanPost { slots } => check_japanpost(input, *slots),
            Self::Codabar { start_stop, data } => check_codabar(input, start_stop, data),
            Self::Gs1(parser) => parser.parse(input).map(|_| ()).map_err(Rejection::from),
        }
    }
}

fn check_japanpost(input: &str, slots: usize) -> Result<(), Rejection> {
    let mut segments = input.split('-');
    let postal = segments.next().unwrap_or_default();
    if postal.len() < standard::JAPANPOST_POSTAL_CODE_LEN || !postal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::Malformed("postal code must lead with 7 digits"));
    }
    if segments.any(str::is_empty) {
        return Err(Rejection::Malformed("empty address segment"));
    }
    let used: usize = input.chars().map(standard::japanpost_slots).sum();
    if used > slots {
        return Err(Rejection::Capacity {
            size: used,
            capacity: slots,
        });
    }
    Ok(())
}

fn check_codabar(input: &str, start_stop: &AsciiSet, data: &Charset) -> Result<(), Rejection> {
    let mut chars = input.chars();
    let (Some(start), Some(stop)) = (chars.next(), chars.next_back()) else {
        return Err(Rejection::Length {
            len: input.chars().count(),
        });
    };
    if !start_stop.contains(start) {
        return Err(Rejection::InvalidChar { index: 0, ch: start });
    }
    if let Some((index, ch)) = data.find_invalid(chars.as_str()) {
        return Err(Rejection::InvalidChar { index: index + 1, ch });
    }
    if !start_stop.contains(stop) {
        let index = input.chars().count() - 1;
        return Err(Rejection::InvalidChar { index, ch: stop });
    }
    Ok(())
}

/// Encoding rule of a single symbology.
#[derive(Debug, Clone)]
pub struct SymbologyRule {
    tag: SymbologyTag,
    charset: Charset,
    length: LengthBound,
    leading: Option<char>,
    check: Check,
}

impl SymbologyRule {
    /// Construct a rule accepting any payload made of `charset` characters whose size fits `length`.
    pub fn new(tag: SymbologyTag, charset: Charset, length: LengthBound) -> Self {
        Self {
            tag,
            charset,
            length,
            leading: None,
            check: Check::None,
        }
    }

    /// Require the payload to start with `leading`.
    pub fn with_leading(mut self, leading: char) -> Self {
        self.leading = Some(leading);
        self
    }

    /// Apply `check` after the character and length checks.
    pub fn with_check(mut self, check: Check) -> Self {
        self.check = check;
        self
    }

    pub fn tag(&self) -> SymbologyTag {
        self.tag
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn length(&self) -> &LengthBound {
        &self.length
    }

    /// Check `input` against the rule, stopping at the first violation.
    pub fn check(&self, input: &str) -> Result<(), Rejection> {
        if input.is_empty() {
            return Err(Rejection::Empty);
        }
        if let Some((index, ch)) = self.charset.find_invalid(input) {
            return Err(Rejection::InvalidChar { index, ch });
        }
        self.length.check(input)?;
        if let Some(leading) = self.leading {
            if !input.starts_with(leading) {
                return Err(Rejection::Leading(leading));
            }
        }
        self.check.apply(input)
    }

    /// Determine whether `input` satisfies the rule.
    pub fn accepts(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }
}

/// Build the rule of `tag` under the given `limits`.
pub fn rule_for(tag: SymbologyTag, limits: &Limits) -> SymbologyRule {
    use SymbologyTag as T;
    match tag {
        T::QrCode => SymbologyRule::new(tag, Charset::Any, LengthBound::Bytes(1..=limits.qr_bytes)),
        T::Pdf417 => SymbologyRule::new(tag, Charset::Any, LengthBound::Bytes(1..=limits.pdf417_bytes)),
        T::JapanPost => SymbologyRule::new(
            tag,
            Charset::upper_alnum_with("-"),
            LengthBound::Chars(standard::JAPANPOST_POSTAL_CODE_LEN..=standard::JAPANPOST_DATA_SLOTS),
        )
        .with_check(Check::JapanPost {
            slots: standard::JAPANPOST_DATA_SLOTS,
        }),
        T::Ean13 | T::Ean8 | T::Itf14 | T::UpcA | T::UpcE => {
            // Every arm of this branch has a base length.
            let base_len = standard::check_digit_base_len(tag).unwrap_or_default();
            let rule = SymbologyRule::new(tag, Charset::digits(), LengthBound::OneOf(vec![base_len, base_len + 1]))
                .with_check(Check::CheckDigit {
                    algorithm: Mod10::GS1,
                    base_len,
                });
            match tag {
                T::UpcE => rule.with_leading(standard::UPCE_NUMBER_SYSTEM),
                _ => rule,
            }
        }
        T::Code39 => SymbologyRule::new(
            tag,
            Charset::upper_alnum_with(standard::CODE39_SYMBOLS),
            LengthBound::Chars(1..=limits.linear_chars),
        ),
        T::Code128 => SymbologyRule::new(
            tag,
            Charset::printable_ascii_excluding(""),
            LengthBound::Chars(1..=limits.linear_chars),
        ),
        T::Nw7 => {
            let start_stop = AsciiSet::from_chars(standard::NW7_START_STOP);
            let data = Charset::digits_with(standard::NW7_SYMBOLS);
            let all = AsciiSet::from_chars(standard::NW7_START_STOP)
                .with_chars(standard::NW7_SYMBOLS)
                .with_range(b'0'..=b'9');
            SymbologyRule::new(tag, Charset::Ascii(all), LengthBound::Chars(3..=limits.linear_chars))
                .with_check(Check::Codabar { start_stop, data })
        }
        T::Gs1DataMatrix => SymbologyRule::new(
            tag,
            Charset::printable_ascii_excluding(standard::GS1_EXCLUDED),
            LengthBound::Chars(1..=limits.gs1_chars),
        )
        .with_check(Check::Gs1(Gs1Parser::new(limits.gs1_chars))),
    }
}

/// Build the complete rule catalog under the given `limits`.
pub fn catalog(limits: &Limits) -> SymbologyTable<SymbologyRule> {
    SymbologyTable::from_fn(|tag| rule_for(tag, limits))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::checksum::CheckDigitError;

    fn rule(tag: SymbologyTag) -> SymbologyRule {
        rule_for(tag, &Limits::default())
    }

    #[test]
    fn test_catalog_is_keyed_by_tag() {
        let catalog = catalog(&Limits::default());
        for (tag, rule) in catalog.iter() {
            assert_eq!(rule.tag(), tag);
        }
    }

    #[test]
    fn test_length_bound() {
        let bound = LengthBound::Chars(2..=3);
        assert_eq!(bound.check("a"), Err(Rejection::Length { len: 1 }));
        assert_eq!(bound.check("ab"), Ok(()));
        assert_eq!(bound.check("abcd"), Err(Rejection::Capacity { size: 4, capacity: 3 }));
        // Three characters, nine bytes.
        assert_eq!(LengthBound::Chars(1..=3).check("ひらが"), Ok(()));
        assert!(LengthBound::Bytes(1..=3).check("ひらが").is_err());
        assert_eq!(LengthBound::OneOf(vec![2, 4]).check("abc"), Err(Rejection::Length { len: 3 }));
    }

    #[test]
    fn test_check_order() {
        let ean13 = rule(SymbologyTag::Ean13);
        assert_eq!(ean13.check(""), Err(Rejection::Empty));
        assert_eq!(ean13.check("11a"), Err(Rejection::InvalidChar { index: 2, ch: 'a' }));
        assert_eq!(ean13.check("111"), Err(Rejection::Length { len: 3 }));
        assert_eq!(
            ean13.check("1111111111111"),
            Err(Rejection::CheckDigit(CheckDigitError::Mismatch {
                expected: 6,
                found: 1
            }))
        );
    }

    #[test]
    fn test_upce_number_system() {
        let upce = rule(SymbologyTag::UpcE);
        assert_eq!(upce.check("1111111"), Err(Rejection::Leading('0')));
        assert!(upce.accepts("0111111"));
        assert!(upce.accepts("01111118"));
    }

    #[test]
    fn test_codabar() {
        let nw7 = rule(SymbologyTag::Nw7);
        assert!(nw7.accepts("A12345D"));
        assert!(nw7.accepts("a4321D"));
        assert!(nw7.accepts("b-c"));
        assert_eq!(nw7.check("A12a45D"), Err(Rejection::InvalidChar { index: 3, ch: 'a' }));
        assert_eq!(nw7.check("512345D"), Err(Rejection::InvalidChar { index: 0, ch: '5' }));
        assert_eq!(nw7.check("A123455"), Err(Rejection::InvalidChar { index: 6, ch: '5' }));
        assert_eq!(nw7.check("A12345G"), Err(Rejection::InvalidChar { index: 6, ch: 'G' }));
        assert_eq!(nw7.check("AD"), Err(Rejection::Length { len: 2 }));
    }

    #[test]
    fn test_japanpost() {
        let japanpost = rule(SymbologyTag::JapanPost);
        assert!(japanpost.accepts("1000013"));
        assert!(japanpost.accepts("10000131-3-2-B503"));
        assert_eq!(
            japanpost.check("100001-3-2-503"),
            Err(Rejection::Malformed("postal code must lead with 7 digits"))
        );
        assert_eq!(
            japanpost.check("1000013A-3"),
            Err(Rejection::Malformed("postal code must lead with 7 digits"))
        );
        assert_eq!(
            japanpost.check("10000131--2"),
            Err(Rejection::Malformed("empty address segment"))
        );
        assert_eq!(
            japanpost.check("1000013-ABCDEFG"),
            Err(Rejection::Capacity { size: 22, capacity: 20 })
        );
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits {
            linear_chars: 4,
            ..Limits::default()
        };
        let code39 = rule_for(SymbologyTag::Code39, &limits);
        assert_eq!(code39.length(), &LengthBound::Chars(1..=4));
        assert!(code39.accepts("ABCD"));
        assert_eq!(code39.check("ABCDE"), Err(Rejection::Capacity { size: 5, capacity: 4 }));
    }

    #[test]
    fn test_gs1_character_set() {
        let gs1 = rule(SymbologyTag::Gs1DataMatrix);
        assert_eq!(gs1.length(), &LengthBound::Chars(1..=standard::DEFAULT_GS1_BUDGET));
        assert!("()-./%&*+,:;<=>?!\"'_".chars().all(|c| gs1.charset().contains(c)));
        assert!(!gs1.charset().contains(' '));
        assert!(!gs1.charset().contains('ロ'));
        assert!(gs1.accepts("(01)12244668801011(10)LOT-1"));
        assert_eq!(
            gs1.check("(01)12244668801011(10)LOT 1"),
            Err(Rejection::InvalidChar { index: 25, ch: ' ' })
        );
        assert_eq!(
            gs1.check("(01)12244668801011(10)ロット"),
            Err(Rejection::InvalidChar { index: 22, ch: 'ロ' })
        );
    }
}
