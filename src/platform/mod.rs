//! Wire format of the voice platform. Everything here is translation between
//! JSON envelopes and the kernel's `Request`/`Response`.

pub mod envelope;

pub use envelope::{RequestEnvelope, ResponseEnvelope};
