//! Infrastructure layer - External systems integration
//!
//! Production bindings for the capabilities the signup pipeline consumes:
//! - Database connection, migrations and the account repository
//! - Argon2id credential hashing
//! - Email-format checking

pub mod db;
pub mod email_validator;
pub mod hasher;
pub mod repositories;

pub use db::{Database, Migrator};
pub use email_validator::EmailValidatorAdapter;
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use repositories::{AccountRepository, AccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use hasher::MockCredentialHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAccountRepository;
