//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::api::controllers::SignUpController;
use crate::infra::Database;
use crate::services::Services;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Signup pipeline entry point
    pub signup_controller: Arc<SignUpController>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with the production services.
    pub fn from_config(database: Arc<Database>, config: &crate::config::Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);

        Self {
            signup_controller: Arc::new(services.signup_controller()),
            database,
        }
    }

    /// Create new application state with a manually built controller.
    pub fn new(signup_controller: Arc<SignUpController>, database: Arc<Database>) -> Self {
        Self {
            signup_controller,
            database,
        }
    }
}
