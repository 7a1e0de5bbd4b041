use crate::SymbologyTag;

/// Number of data digits, check digit excluded, of the fixed-length numeric symbologies.
pub fn check_digit_base_len(tag: SymbologyTag) -> Option<usize> {
    match tag {
        SymbologyTag::Ean13 => Some(12),
        SymbologyTag::Ean8 => Some(7),
        SymbologyTag::Itf14 => Some(13),
        SymbologyTag::UpcA => Some(11),
        SymbologyTag::UpcE => Some(7),
        _ => None,
    }
}

/// Number system digit every UPC-E code must start with.
pub const UPCE_NUMBER_SYSTEM: char = '0';

/// Default UTF-8 byte ceiling of a QR code payload.
pub const DEFAULT_QR_CAPACITY: usize = 500;

/// Default UTF-8 byte ceiling of a PDF417 payload.
pub const DEFAULT_PDF417_CAPACITY: usize = 1024;

/// Default character ceiling of the variable-length linear symbologies (Code 39, Code 128, NW-7).
pub const DEFAULT_LINEAR_CAPACITY: usize = 80;

/// Application identifier of the GTIN field.
pub const GS1_AI_GTIN: &str = "01";
/// Application identifier of the expiration date field.
pub const GS1_AI_EXPIRY: &str = "17";
/// Application identifier of the batch or lot number field.
pub const GS1_AI_BATCH: &str = "10";

/// Printable ASCII characters outside the GS1 AI encodable character set 82.
pub const GS1_EXCLUDED: &str = " #$@[\\]^`{|}~";

/// GTIN-14 digits, check digit excluded.
pub const GTIN_BASE_LEN: usize = 13;
const GS1_EXPIRY_LEN: usize = 6;
const GS1_BATCH_MAX_LEN: usize = 20;

/// Length of a parenthesized AI segment carrying a value of `value_len` characters.
pub const fn gs1_segment_len(ai: &str, value_len: usize) -> usize {
    ai.len() + 2 + value_len
}

/// Default length budget of a GS1 DataMatrix payload: one complete GTIN, an expiration date and a maximal batch
/// number.
pub const DEFAULT_GS1_BUDGET: usize = gs1_segment_len(GS1_AI_GTIN, GTIN_BASE_LEN + 1)
    + gs1_segment_len(GS1_AI_EXPIRY, GS1_EXPIRY_LEN)
    + gs1_segment_len(GS1_AI_BATCH, GS1_BATCH_MAX_LEN);

/// Digits of the postal code leading a Japan Post customer barcode.
pub const JAPANPOST_POSTAL_CODE_LEN: usize = 7;

/// Character slots available for the postal code and the address display number.
pub const JAPANPOST_DATA_SLOTS: usize = 20;

/// Number of barcode character slots `c` occupies in a Japan Post customer barcode. Letters are written as a control
/// code followed by a digit.
pub fn japanpost_slots(c: char) -> usize {
    if c.is_ascii_uppercase() {
        2
    } else {
        1
    }
}

/// Start/stop characters of NW-7, accepted in either case.
pub const NW7_START_STOP: &str = "ABCDabcd";

/// Symbols allowed between the NW-7 start and stop characters, besides digits.
pub const NW7_SYMBOLS: &str = "-.$:/+";

/// Symbols encodable by Code 39, besides digits and uppercase letters.
pub const CODE39_SYMBOLS: &str = "-.$/+% ";

/// Value of the Code 128 start character selecting code set B.
pub const CODE128_START_B: u8 = 104;

/// Code 128 modulus.
pub const CODE128_MODULUS: u8 = 103;

/// Symbol value of `c` in Code 128 code set B, if encodable there.
/// # Example
/// ```
/// use bcval_core::standard;
/// assert_eq!(standard::code128_set_b_value(' '), Some(0));
/// assert_eq!(standard::code128_set_b_value('A'), Some(33));
/// assert_eq!(standard::code128_set_b_value('\n'), None);
/// ```
pub fn code128_set_b_value(c: char) -> Option<u8> {
    match c {
        ' '..='\u{7f}' => Some(c as u8 - b' '),
        _ => None,
    }
}
