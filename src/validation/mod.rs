//! Request validation stage of the signup pipeline.

mod format;
mod presence;

pub use format::{EmailValidator, FormatValidator};
pub use presence::FieldPresenceValidator;

#[cfg(any(test, feature = "test-utils"))]
pub use format::MockEmailValidator;
