use bcval_core::standard::{CODE128_MODULUS, CODE128_START_B};

/// Check digit algorithm over a sequence of symbol values.
pub trait CheckDigit {
    /// Compute the check value of `values`.
    fn compute(&self, values: &[u8]) -> u8;

    /// Check that the last element of `values` is the check value of the ones preceding it.
    fn check(&self, values: &[u8]) -> Result<(), CheckDigitError> {
        let (&found, data) = values.split_last().ok_or(CheckDigitError::Missing)?;
        let expected = self.compute(data);
        if expected == found {
            Ok(())
        } else {
            Err(CheckDigitError::Mismatch { expected, found })
        }
    }

    /// Determine whether the last element of `values` is the check value of the ones preceding it.
    fn verify(&self, values: &[u8]) -> bool {
        self.check(values).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CheckDigitError {
    #[error("missing check digit")]
    Missing,
    #[error("check digit {found} does not match expected {expected}")]
    Mismatch { expected: u8, found: u8 },
}

/// Modulo-10 weighted sum. Weights alternate between `near` and `far`, starting with `near` on the rightmost data
/// digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod10 {
    near: u8,
    far: u8,
}

impl Mod10 {
    /// Weights 3, 1, 3, ... used by EAN, UPC, ITF and GTIN.
    pub const GS1: Self = Self::new(3, 1);

    pub const fn new(near: u8, far: u8) -> Self {
        Self { near, far }
    }
}

impl CheckDigit for Mod10 {
    fn compute(&self, digits: &[u8]) -> u8 {
        let weights = [self.near, self.far].into_iter().cycle();
        let sum = digits
            .iter()
            .rev()
            .zip(weights)
            .fold(0u32, |acc, (&digit, weight)| {
                (acc + digit as u32 * weight as u32) % 10
            });
        ((10 - sum) % 10) as u8
    }
}

/// Modulo-103 weighted sum of Code 128. The start character has weight 1, data symbols are weighted by their 1-based
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod103 {
    start: u8,
}

impl Mod103 {
    /// Checksum for symbols opened by the code set B start character.
    pub const SET_B: Self = Self::new(CODE128_START_B);

    pub const fn new(start: u8) -> Self {
        Self { start }
    }

    /// Compute the checksum of `text` in code set B, if every character is encodable there.
    /// # Example
    /// ```
    /// use bcval_validate::Mod103;
    /// assert_eq!(Mod103::SET_B.checksum_of("A"), Some(34));
    /// assert_eq!(Mod103::SET_B.checksum_of("ひ"), None);
    /// ```
    pub fn checksum_of(&self, text: &str) -> Option<u8> {
        use bcval_core::standard::code128_set_b_value;
        let values: Option<Vec<u8>> = text.chars().map(code128_set_b_value).collect();
        values.map(|values| self.compute(&values))
    }
}

impl CheckDigit for Mod103 {
    fn compute(&self, values: &[u8]) -> u8 {
        let modulus = CODE128_MODULUS as u32;
        let sum = values
            .iter()
            .zip(1u32..)
            .fold(self.start as u32 % modulus, |acc, (&value, position)| {
                (acc + (position % modulus) * value as u32) % modulus
            });
        sum as u8
    }
}

/// Convert an ASCII digit string to digit values. Returns `None` if any character is not a digit.
pub fn digit_values(code: &str) -> Option<Vec<u8>> {
    code.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Append the GS1 modulo-10 check digit to the digit string `code`.
/// # Example
/// ```
/// use bcval_validate::append_check_digit;
/// assert_eq!(append_check_digit("111111111111").as_deref(), Some("1111111111116"));
/// assert_eq!(append_check_digit("12a"), None);
/// ```
pub fn append_check_digit(code: &str) -> Option<String> {
    let digits = digit_values(code)?;
    let check = Mod10::GS1.compute(&digits);
    let mut completed = String::with_capacity(code.len() + 1);
    completed.push_str(code);
    completed.push(char::from(b'0' + check));
    Some(completed)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn digits(code: &str) -> Vec<u8> {
        digit_values(code).unwrap()
    }

    #[test_case("111111111111", 6 ; "ean13 ones")]
    #[test_case("282222422922", 1 ; "ean13 mixed")]
    #[test_case("1111111", 5 ; "ean8 ones")]
    #[test_case("4444444", 0 ; "ean8 fours")]
    #[test_case("1111111111111", 3 ; "itf14 ones")]
    #[test_case("12345678901", 2 ; "upca sequence")]
    #[test_case("0111412", 6 ; "upce")]
    #[test_case("1224466880101", 1 ; "gtin")]
    fn test_gs1_compute(code: &str, expected: u8) {
        assert_eq!(Mod10::GS1.compute(&digits(code)), expected);
    }

    #[test]
    fn test_gs1_check() {
        assert_eq!(Mod10::GS1.check(&digits("1111111111116")), Ok(()));
        assert_eq!(
            Mod10::GS1.check(&digits("1111111111111")),
            Err(CheckDigitError::Mismatch {
                expected: 6,
                found: 1
            })
        );
        assert_eq!(Mod10::GS1.check(&[]), Err(CheckDigitError::Missing));
    }

    #[test]
    fn test_inverse_weights() {
        let inverse = Mod10::new(1, 3);
        // 1*1 + 2*3 + 3*1 = 10
        assert_eq!(inverse.compute(&[3, 2, 1]), 0);
        assert!(!inverse.verify(&[3, 2, 1, 1]));
    }

    #[test]
    fn test_mod103() {
        // 104 + 48*1 + 42*2 + 42*3 + 17*4 + 18*5 + 19*6 + 35*7 = 879
        assert_eq!(Mod103::SET_B.checksum_of("PJJ123C"), Some(55));
        assert_eq!(Mod103::SET_B.compute(&[]), 104 % 103);
        assert!(Mod103::SET_B.verify(&[33, 34]));
    }

    #[test]
    fn test_mod103_long_input_does_not_overflow() {
        let text = "~".repeat(100_000);
        assert!(Mod103::SET_B.checksum_of(&text).unwrap() < 103);
    }

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_values("0907"), Some(vec![0, 9, 0, 7]));
        assert_eq!(digit_values("09 7"), None);
        assert_eq!(digit_values(""), Some(vec![]));
    }
}
