//! Unit conversion lookup.
//!
//! Only the pairs listed in `rates` convert. Anything else is reported back as
//! unsupported rather than guessed at.

pub mod rates;
pub mod resolver;
pub mod table;

pub use resolver::{parse_quantity, resolve, resolve_slots, ConversionOutcome};
pub use table::{ConversionCatalog, ConversionTable};
