//! Service Container - Wires the signup pipeline.
//!
//! Builds the production collaborators once; each is stateless and
//! shared across requests behind an `Arc`.

use std::sync::Arc;

use super::{AccountCreator, AddAccount};
use crate::api::controllers::SignUpController;
use crate::config::Config;
use crate::infra::{AccountStore, Argon2Hasher, EmailValidatorAdapter};
use crate::validation::EmailValidator;

/// Concrete set of application services
pub struct Services {
    add_account: Arc<dyn AddAccount>,
    email_validator: Arc<dyn EmailValidator>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(add_account: Arc<dyn AddAccount>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            add_account,
            email_validator,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: Arc<sea_orm::DatabaseConnection>, config: &Config) -> Self {
        let hasher = Arc::new(Argon2Hasher::new(config.hash_work_factor));
        let repo = Arc::new(AccountStore::new(db));

        Self::new(
            Arc::new(AccountCreator::new(hasher, repo)),
            Arc::new(EmailValidatorAdapter::new()),
        )
    }

    /// Build the signup controller over these services
    pub fn signup_controller(&self) -> SignUpController {
        SignUpController::new(self.email_validator.clone(), self.add_account.clone())
    }
}
