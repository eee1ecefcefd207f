//! API layer - Controllers, HTTP handlers and routes
//!
//! - `controllers`: transport-independent request handling
//! - `handlers`: axum adapters over the controllers
//! - `routes`: router and global middleware

pub mod controllers;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
