//! Credential hashing - Argon2id adapter.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way hashing capability.
///
/// Single attempt: a failure is returned to the caller as-is.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext secret
    async fn encrypt(&self, plaintext: &str) -> AppResult<String>;
}

/// Argon2id hasher with a work factor fixed at construction.
///
/// The work factor is the Argon2 time cost; memory and parallelism use
/// the library defaults. An out-of-range work factor is reported by
/// `encrypt`, not by the constructor.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Hasher {
    work_factor: u32,
}

impl Argon2Hasher {
    pub fn new(work_factor: u32) -> Self {
        Self { work_factor }
    }

    fn argon2(&self) -> AppResult<Argon2<'static>> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            self.work_factor,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AppError::hashing(format!("Invalid hashing parameters: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String> {
        let argon2 = self.argon2()?;
        let plaintext = plaintext.to_owned();

        // Argon2 is CPU bound; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))
        })
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }
}
