use itertools::Itertools;

use bcval_core::standard::{GS1_AI_GTIN, GTIN_BASE_LEN};

use crate::checksum::{digit_values, CheckDigit, CheckDigitError, Mod10};

/// Application identifier segment of a GS1 payload, e.g. `(17)250712`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gs1Segment<'a> {
    /// Digits between the parentheses.
    pub ai: &'a str,
    /// Data following the closing parenthesis up to the next segment.
    pub value: &'a str,
}

/// GS1 payload split into its AI segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gs1Payload<'a> {
    segments: Vec<Gs1Segment<'a>>,
}

impl<'a> Gs1Payload<'a> {
    /// Segments in order of appearance.
    pub fn segments(&self) -> &[Gs1Segment<'a>] {
        &self.segments
    }

    /// Value of the first segment tagged with `ai`.
    pub fn get(&self, ai: &str) -> Option<&'a str> {
        self.segments
            .iter()
            .find(|segment| segment.ai == ai)
            .map(|segment| segment.value)
    }

    /// The GTIN field. Always present on a parsed payload.
    pub fn gtin(&self) -> Option<&'a str> {
        self.get(GS1_AI_GTIN)
    }
}

impl std::fmt::Display for Gs1Payload<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .segments
            .iter()
            .format_with("", |segment, f| f(&format_args!("({}){}", segment.ai, segment.value)));
        write!(f, "{}", joined)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Gs1Error {
    #[error("empty GS1 payload")]
    Empty,
    #[error("GS1 payload of {len} characters exceeds the budget of {budget}")]
    OverBudget { len: usize, budget: usize },
    #[error("malformed application identifier at offset {0}")]
    MalformedAi(usize),
    #[error("missing GTIN application identifier (01)")]
    MissingGtin,
    #[error("GTIN field '{0}' is not made of 13 or 14 digits")]
    GtinLength(String),
    #[error("GTIN {0}")]
    GtinCheckDigit(#[from] CheckDigitError),
}

/// Scanner for GS1 payloads written in the human readable `(AI)value(AI)value...` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gs1Parser {
    budget: usize,
}

impl Gs1Parser {
    /// Construct a parser rejecting payloads longer than `budget` characters.
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Parse `raw` and validate its GTIN field. Segments other than the GTIN are not inspected.
    /// # Example
    /// ```
    /// use bcval_validate::Gs1Parser;
    /// let parser = Gs1Parser::new(52);
    /// let payload = parser.parse("(01)12244668801011(17)250712").unwrap();
    /// assert_eq!(payload.gtin(), Some("12244668801011"));
    /// assert_eq!(payload.get("17"), Some("250712"));
    /// assert!(parser.parse("(17)250712").is_err());
    /// ```
    pub fn parse<'a>(&self, raw: &'a str) -> Result<Gs1Payload<'a>, Gs1Error> {
        if raw.is_empty() {
            return Err(Gs1Error::Empty);
        }
        let len = raw.chars().count();
        if len > self.budget {
            return Err(Gs1Error::OverBudget {
                len,
                budget: self.budget,
            });
        }
        let payload = Gs1Payload {
            segments: scan_segments(raw)?,
        };
        let gtin = payload.gtin().ok_or(Gs1Error::MissingGtin)?;
        check_gtin(gtin)?;
        Ok(payload)
    }
}

/// Split `raw` into `(AI)value` segments.
fn scan_segments(raw: &str) -> Result<Vec<Gs1Segment<'_>>, Gs1Error> {
    let mut chars = raw.char_indices().peekable();
    let mut segments = Vec::new();
    while let Some((open, c)) = chars.next() {
        if c != '(' {
            return Err(Gs1Error::MalformedAi(open));
        }
        let ai_len = chars
            .peeking_take_while(|&(_, c)| c.is_ascii_digit())
            .count();
        let close = match chars.next() {
            Some((close, ')')) if ai_len > 0 => close,
            _ => return Err(Gs1Error::MalformedAi(open)),
        };
        let value_start = close + 1;
        let value_end = chars
            .peeking_take_while(|&(_, c)| c != '(')
            .last()
            .map_or(value_start, |(i, c)| i + c.len_utf8());
        segments.push(Gs1Segment {
            ai: &raw[open + 1..close],
            value: &raw[value_start..value_end],
        });
    }
    Ok(segments)
}

/// Validate a GTIN field: 13 digits with the check digit omitted, or 14 digits with a valid check digit.
fn check_gtin(gtin: &str) -> Result<(), Gs1Error> {
    let digits = digit_values(gtin)
        .filter(|digits| digits.len() == GTIN_BASE_LEN || digits.len() == GTIN_BASE_LEN + 1)
        .ok_or_else(|| Gs1Error::GtinLength(gtin.to_owned()))?;
    if digits.len() == GTIN_BASE_LEN + 1 {
        Mod10::GS1.check(&digits)?;
    }
    Ok(())
}
