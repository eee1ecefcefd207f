//! Repository layer - Data access abstraction

mod account_repository;
pub(crate) mod entities;

pub use account_repository::{AccountRepository, AccountStore};

// Export mock for tests
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
