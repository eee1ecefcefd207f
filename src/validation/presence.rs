//! Required-field checks for signup requests.

use crate::config::REQUIRED_FIELDS;
use crate::domain::{AccountCreationRequest, DomainError, DomainResult, SignupForm};

/// Confirms every required field is present and non-empty.
///
/// Fields are checked in [`REQUIRED_FIELDS`] order and the first missing
/// one is reported, so the error for a given request is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldPresenceValidator;

impl FieldPresenceValidator {
    pub fn new() -> Self {
        Self
    }

    /// Turn a raw request into a complete form, or name the first missing field.
    pub fn validate(&self, request: AccountCreationRequest) -> DomainResult<SignupForm> {
        if let Some(field) = REQUIRED_FIELDS
            .into_iter()
            .find(|field| request.value(*field).map_or(true, str::is_empty))
        {
            return Err(DomainError::MissingField(field));
        }

        Ok(SignupForm {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            password_confirmation: request.password_confirmation.unwrap_or_default(),
        })
    }
}
