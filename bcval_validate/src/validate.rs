use std::sync::OnceLock;

use tracing::{debug, trace};

use bcval_core::standard;
use bcval_core::{SymbologyTable, SymbologyTag, UnknownSymbology};

use crate::checksum::CheckDigitError;
use crate::gs1::Gs1Error;
use crate::rule::{self, SymbologyRule};

/// Capacity ceilings of the variable-length symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// UTF-8 bytes of a QR code payload.
    pub qr_bytes: usize,
    /// UTF-8 bytes of a PDF417 payload.
    pub pdf417_bytes: usize,
    /// Characters of a Code 39, Code 128 or NW-7 payload.
    pub linear_chars: usize,
    /// Characters of a GS1 DataMatrix payload.
    pub gs1_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            qr_bytes: standard::DEFAULT_QR_CAPACITY,
            pdf417_bytes: standard::DEFAULT_PDF417_CAPACITY,
            linear_chars: standard::DEFAULT_LINEAR_CAPACITY,
            gs1_chars: standard::DEFAULT_GS1_BUDGET,
        }
    }
}

/// Reason a payload cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("empty payload")]
    Empty,
    #[error("character {ch:?} at position {index} cannot be encoded")]
    InvalidChar { index: usize, ch: char },
    #[error("length {len} is not accepted")]
    Length { len: usize },
    #[error("payload size {size} exceeds capacity {capacity}")]
    Capacity { size: usize, capacity: usize },
    #[error("payload must start with '{0}'")]
    Leading(char),
    #[error(transparent)]
    CheckDigit(#[from] CheckDigitError),
    #[error("malformed payload: {0}")]
    Malformed(&'static str),
    #[error(transparent)]
    Gs1(#[from] Gs1Error),
}

/// Validator of barcode payloads against the rule catalog.
#[derive(Debug, Clone)]
pub struct Validator {
    limits: Limits,
    rules: SymbologyTable<SymbologyRule>,
}

impl Validator {
    /// Construct a validator with the default [Limits].
    pub fn new() -> Self {
        Self::build(Limits::default())
    }

    fn build(limits: Limits) -> Self {
        let rules = rule::catalog(&limits);
        debug!("built symbology catalog with limits {:?}", limits);
        Self { limits, rules }
    }

    /// Get the current limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Replace every limit with `limits`.
    pub fn with_limits(self, limits: Limits) -> Self {
        Self::build(limits)
    }

    /// Limit QR code payloads to `bytes` UTF-8 bytes.
    pub fn with_qr_capacity(self, bytes: usize) -> Self {
        let limits = Limits {
            qr_bytes: bytes,
            ..self.limits
        };
        self.with_limits(limits)
    }

    /// Limit PDF417 payloads to `bytes` UTF-8 bytes.
    pub fn with_pdf417_capacity(self, bytes: usize) -> Self {
        let limits = Limits {
            pdf417_bytes: bytes,
            ..self.limits
        };
        self.with_limits(limits)
    }

    /// Limit Code 39, Code 128 and NW-7 payloads to `chars` characters.
    pub fn with_linear_capacity(self, chars: usize) -> Self {
        let limits = Limits {
            linear_chars: chars,
            ..self.limits
        };
        self.with_limits(limits)
    }

    /// Limit GS1 DataMatrix payloads to `chars` characters.
    pub fn with_gs1_budget(self, chars: usize) -> Self {
        let limits = Limits {
            gs1_chars: chars,
            ..self.limits
        };
        self.with_limits(limits)
    }

    /// Get the rule applied to `tag`.
    pub fn rule(&self, tag: SymbologyTag) -> &SymbologyRule {
        &self.rules[tag]
    }

    /// Check `input` against the rule of `tag`, reporting why it is rejected.
    pub fn check(&self, tag: SymbologyTag, input: &str) -> Result<(), Rejection> {
        let result = self.rules[tag].check(input);
        match &result {
            Ok(()) => trace!("accepted {} payload of {} B", tag, input.len()),
            Err(reason) => debug!("rejected {} payload: {}", tag, reason),
        }
        result
    }

    /// Determine whether `input` can be encoded as `tag`.
    /// # Example
    /// ```
    /// use bcval_core::SymbologyTag;
    /// use bcval_validate::Validator;
    /// let validator = Validator::new();
    /// assert!(validator.validate(SymbologyTag::Ean13, "1111111111116"));
    /// assert!(!validator.validate(SymbologyTag::Ean13, "1111111111111"));
    /// ```
    pub fn validate(&self, tag: SymbologyTag, input: &str) -> bool {
        self.check(tag, input).is_ok()
    }

    /// Same as [Validator::validate] with the symbology given by name. Unknown names are an error, not a verdict.
    pub fn validate_str(&self, tag: &str, input: &str) -> Result<bool, UnknownSymbology> {
        let tag: SymbologyTag = tag.parse()?;
        Ok(self.validate(tag, input))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate `input` as `tag` with a shared default [Validator].
pub fn validate(tag: SymbologyTag, input: &str) -> bool {
    static DEFAULT: OnceLock<Validator> = OnceLock::new();
    DEFAULT.get_or_init(Validator::new).validate(tag, input)
}
