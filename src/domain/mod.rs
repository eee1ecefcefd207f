//! Domain layer - Core business entities and errors
//!
//! Account shapes that flow through the signup pipeline and the errors
//! a caller can observe. No infrastructure dependencies.

pub mod account;
pub mod error;

pub use account::{
    AccountCreationInput, AccountCreationRequest, AccountId, Field, SignupForm, StoredAccount,
};
pub use error::{DomainError, DomainResult};
