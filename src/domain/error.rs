//! Domain-level errors.
//!
//! These are the only failures a signup caller ever sees. They carry a
//! field name and a message, never collaborator detail.

use thiserror::Error;

use super::account::Field;

/// Client-visible signup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is absent or empty
    #[error("Missing param: {0}")]
    MissingField(Field),

    /// A field is present but not acceptable
    #[error("Invalid param: {0}")]
    InvalidField(Field),

    /// A collaborator failed; details are logged, not returned
    #[error("Internal server error")]
    ServerFailure,
}

impl DomainError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::MissingField(_) => "MISSING_PARAM",
            DomainError::InvalidField(_) => "INVALID_PARAM",
            DomainError::ServerFailure => "SERVER_ERROR",
        }
    }

    /// Status code of the envelope carrying this error
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::MissingField(_) | DomainError::InvalidField(_) => 400,
            DomainError::ServerFailure => 500,
        }
    }

    /// Offending field, if the error names one
    pub fn field(&self) -> Option<Field> {
        match self {
            DomainError::MissingField(field) | DomainError::InvalidField(field) => Some(*field),
            DomainError::ServerFailure => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        assert_eq!(
            DomainError::MissingField(Field::Name).to_string(),
            "Missing param: name"
        );
        assert_eq!(
            DomainError::InvalidField(Field::PasswordConfirmation).to_string(),
            "Invalid param: passwordConfirmation"
        );
        assert_eq!(DomainError::ServerFailure.to_string(), "Internal server error");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::MissingField(Field::Email).status_code(), 400);
        assert_eq!(DomainError::InvalidField(Field::Email).status_code(), 400);
        assert_eq!(DomainError::ServerFailure.status_code(), 500);
    }

    #[test]
    fn test_server_failure_has_no_field() {
        assert_eq!(DomainError::ServerFailure.field(), None);
        assert_eq!(
            DomainError::InvalidField(Field::Email).field(),
            Some(Field::Email)
        );
    }
}
