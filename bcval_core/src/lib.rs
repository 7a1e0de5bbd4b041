mod charset;
pub mod standard;
mod symbology;

pub use charset::{AsciiSet, Charset};
pub use symbology::{map_symbology_id_str, SymbologyTable, SymbologyTag, UnknownSymbology};
pub use symbology::NUM_SYMBOLOGIES;
