//! Signup API - account registration service
//!
//! Validates a signup request, hashes the credential, persists the
//! account and answers with a single status/body envelope.
//!
//! # Architecture Layers
//!
//! - **api**: signup controller, HTTP handlers and routes
//! - **validation**: required-field and email-format checks
//! - **services**: account creation use case and wiring
//! - **infra**: database, Argon2 hasher, email checker
//! - **domain**: account types and client-visible errors
//! - **types**: response envelope
//! - **config**: environment configuration and constants
//! - **cli** / **commands**: command-line entry points
//! - **errors**: collaborator fault type
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use api::{controllers::SignUpController, AppState};
pub use config::Config;
pub use domain::{AccountCreationRequest, DomainError, StoredAccount};
pub use errors::{AppError, AppResult};
pub use types::ResponseEnvelope;
