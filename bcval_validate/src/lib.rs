mod checksum;
mod gs1;
mod rule;
mod validate;

pub use checksum::{append_check_digit, digit_values, CheckDigit, CheckDigitError, Mod10, Mod103};
pub use gs1::{Gs1Error, Gs1Parser, Gs1Payload, Gs1Segment};
pub use rule::{catalog, rule_for, Check, LengthBound, SymbologyRule};
pub use validate::{validate, Limits, Rejection, Validator};
