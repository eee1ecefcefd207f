//! Signup handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::api::AppState;
use crate::domain::AccountCreationRequest;
use crate::errors::{AppError, AppResult};
use crate::types::ResponseEnvelope;

/// Create signup routes
pub fn signup_routes() -> Router<AppState> {
    Router::new().route("/signup", post(signup))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Signup",
    request_body = AccountCreationRequest,
    responses(
        (status = 200, description = "Account created", body = crate::domain::StoredAccount),
        (status = 400, description = "Missing or invalid field"),
        (status = 500, description = "Account could not be created")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<AccountCreationRequest>, JsonRejection>,
) -> AppResult<ResponseEnvelope> {
    let Json(request) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    Ok(state.signup_controller.handle(request).await)
}
