//! Application services layer - Use cases.
//!
//! Services orchestrate infrastructure to fulfill application use cases.
//! They depend on abstractions (traits) for dependency inversion.

mod account_service;
pub mod container;

pub use account_service::{AccountCreator, AddAccount};
pub use container::Services;

#[cfg(any(test, feature = "test-utils"))]
pub use account_service::MockAddAccount;
