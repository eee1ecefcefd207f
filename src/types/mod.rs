//! Shared types.

mod envelope;

pub use envelope::{ResponseBody, ResponseEnvelope};
