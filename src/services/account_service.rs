//! Account service - Creates accounts.
//!
//! Hashes the credential, then persists the account. Collaborator faults
//! propagate unchanged; there is no recovery at this layer.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AccountCreationInput, StoredAccount};
use crate::errors::AppResult;
use crate::infra::{AccountRepository, CredentialHasher};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account creation use case.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create an account from plaintext input
    async fn add(&self, input: AccountCreationInput) -> AppResult<StoredAccount>;
}

/// Concrete implementation of AddAccount using a hasher and a repository.
pub struct AccountCreator {
    hasher: Arc<dyn CredentialHasher>,
    repo: Arc<dyn AccountRepository>,
}

impl AccountCreator {
    pub fn new(hasher: Arc<dyn CredentialHasher>, repo: Arc<dyn AccountRepository>) -> Self {
        Self { hasher, repo }
    }
}

#[async_trait]
impl AddAccount for AccountCreator {
    async fn add(&self, input: AccountCreationInput) -> AppResult<StoredAccount> {
        let hashed_password = self.hasher.encrypt(&input.password).await?;
        tracing::debug!(email = %input.email, "Credential hashed");

        self.repo.add(input.with_password(hashed_password)).await
    }
}
