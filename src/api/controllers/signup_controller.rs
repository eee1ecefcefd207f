//! Signup controller - transport-independent account registration.

use std::sync::Arc;

use crate::domain::{AccountCreationRequest, DomainError, DomainResult, Field, StoredAccount};
use crate::services::AddAccount;
use crate::types::ResponseEnvelope;
use crate::validation::{EmailValidator, FieldPresenceValidator, FormatValidator};

/// Validates a signup request and creates the account.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. every required field is present (`400 MissingField`)
/// 2. the password confirmation matches (`400 InvalidField`)
/// 3. the email is well-formed (`400 InvalidField`, or `500` if the
///    checker fails)
/// 4. account creation succeeds (`200`, or `500` on any fault)
pub struct SignUpController {
    presence: FieldPresenceValidator,
    format: FormatValidator,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            presence: FieldPresenceValidator::new(),
            format: FormatValidator::new(email_validator),
            add_account,
        }
    }

    /// Handle one signup request. Never fails; every outcome is an envelope.
    pub async fn handle(&self, request: AccountCreationRequest) -> ResponseEnvelope {
        match self.signup(request).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "Account created");
                ResponseEnvelope::ok(account)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Signup rejected");
                ResponseEnvelope::error(err)
            }
        }
    }

    async fn signup(&self, request: AccountCreationRequest) -> DomainResult<StoredAccount> {
        let form = self.presence.validate(request)?;

        // Exact comparison, no normalization
        if form.password != form.password_confirmation {
            return Err(DomainError::InvalidField(Field::PasswordConfirmation));
        }

        self.format.validate(&form.email)?;

        self.add_account
            .add(form.into_input())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Account creation failed");
                DomainError::ServerFailure
            })
    }
}
