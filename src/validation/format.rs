//! Email format checks.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Field};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Email-format checking capability.
///
/// `Ok(false)` means the address is malformed; `Err` means the checker
/// itself failed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// Confirms the email field is well-formed.
pub struct FormatValidator {
    email_validator: Arc<dyn EmailValidator>,
}

impl FormatValidator {
    pub fn new(email_validator: Arc<dyn EmailValidator>) -> Self {
        Self { email_validator }
    }

    /// Reject a malformed address; a checker fault becomes `ServerFailure`.
    pub fn validate(&self, email: &str) -> DomainResult<()> {
        match self.email_validator.is_valid(email) {
            Ok(true) => Ok(()),
            Ok(false) => Err(DomainError::InvalidField(Field::Email)),
            Err(e) => {
                tracing::error!(error = %e, "Email validator failed");
                Err(DomainError::ServerFailure)
            }
        }
    }
}
