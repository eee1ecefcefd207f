//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::signup_handler;
use crate::domain::{AccountCreationRequest, StoredAccount};

/// OpenAPI documentation for the Signup API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup API",
        version = "0.1.0",
        description = "Account registration with Axum, SeaORM and Argon2",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(signup_handler::signup),
    components(schemas(AccountCreationRequest, StoredAccount)),
    tags(
        (name = "Signup", description = "Account registration")
    )
)]
pub struct ApiDoc;
