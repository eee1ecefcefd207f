//! Account domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Input fields of a signup request, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque account identifier assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw signup request as received from the transport.
///
/// Every field is optional on the wire; an absent field and an empty
/// string are both treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountCreationRequest {
    /// Account display name
    #[schema(example = "Ana")]
    pub name: Option<String>,
    /// Account email address
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    /// Plaintext password
    #[schema(example = "secret")]
    pub password: Option<String>,
    /// Must equal `password`
    #[schema(example = "secret")]
    pub password_confirmation: Option<String>,
}

impl AccountCreationRequest {
    /// Value of a single field, if present
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::PasswordConfirmation => self.password_confirmation.as_deref(),
        }
    }
}

/// Signup request with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl SignupForm {
    /// Drop the confirmation and keep what the use case needs
    pub fn into_input(self) -> AccountCreationInput {
        AccountCreationInput {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Data forwarded to account creation.
///
/// Before hashing `password` is plaintext; the record handed to the
/// repository always carries the hashed form.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCreationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountCreationInput {
    /// Same record with the password replaced
    pub fn with_password(self, password: String) -> Self {
        Self { password, ..self }
    }
}

// Don't expose the password in debug output
impl std::fmt::Debug for AccountCreationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCreationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Persisted account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredAccount {
    /// Identifier assigned on creation
    #[schema(value_type = String, example = "2f1c6a0e-9b1e-4f3a-8d57-3c1d8f7b6a20")]
    pub id: AccountId,
    /// Account display name
    pub name: String,
    /// Account email address
    pub email: String,
    /// Hashed password
    pub password: String,
}
