//! Spoken text: message bundles, template formatting and per-language lookup.

pub mod format;
pub mod localizer;
pub mod messages;

pub use format::Arg;
pub use localizer::{LocalizationError, Localizer};
pub use messages::MessageKey;
