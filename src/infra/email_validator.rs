//! Email-format checker backed by the `validator` crate.

use validator::ValidateEmail;

use crate::errors::AppResult;
use crate::validation::EmailValidator;

/// Production [`EmailValidator`] using `validator`'s HTML5-style rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
