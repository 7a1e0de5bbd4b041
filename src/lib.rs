//! # bcval
//!
//! Validation of barcode payloads before they reach a rendering engine.
//!
//! Each supported symbology has a rule describing the characters it can encode, the accepted payload sizes and,
//! where the format defines one, a check digit or a structured layout. [Validator] dispatches a payload to the rule
//! of its symbology and returns a verdict; [Validator::check] also reports why a payload was rejected.
//!
//! ```rust
//! use bcval::{SymbologyTag, Validator};
//!
//! let validator = Validator::new();
//! assert!(validator.validate(SymbologyTag::Ean13, "2822224229221"));
//! assert!(validator.validate(SymbologyTag::Gs1DataMatrix, "(01)12244668801011(17)250712(10)22322SSD3"));
//! assert!(!validator.validate(SymbologyTag::Code128, "ひらがな"));
//! ```
//!
//! Capacity ceilings of the free-form symbologies are configurable:
//!
//! ```rust
//! use bcval::{SymbologyTag, Validator};
//!
//! let validator = Validator::new().with_qr_capacity(16);
//! assert!(!validator.validate(SymbologyTag::QrCode, "https://www.google.com/"));
//! ```
//!
//! Validated payloads are turned into a [RenderRequest] carrying the engine identifier of the symbology and
//! normalized colors, and passed to an implementation of [Renderer].

pub use bcval_core::standard;
pub use bcval_core::{map_symbology_id_str, AsciiSet, Charset, SymbologyTable, SymbologyTag, UnknownSymbology};
pub use bcval_render::{normalize_color, render_validated, RenderError, RenderRequest, RenderRequestBuilder, Renderer};
pub use bcval_validate::{
    append_check_digit, validate, CheckDigit, CheckDigitError, Gs1Error, Gs1Parser, Gs1Payload, Limits, Mod10, Mod103,
    Rejection, SymbologyRule, Validator,
};
