// handlers/public/login.rs - POST /login handler

use axum::extract::State;
use serde::Deserialize;

use super::signup::SessionData;
use crate::api::JsonBody;
use crate::auth::password::{verify_password, verify_unknown_account};
use crate::error::ApiError;
use crate::handlers::utils::{internal_error, is_present};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const ENDPOINT: &str = "Login";
const FAILURE: &str = "Internal server error";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /login - Authenticate with email and password
///
/// Missing credentials, unknown emails and wrong passwords all produce the
/// same 401. An unknown email still pays for one Argon2 verification, so
/// response time does not reveal which emails are registered.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ApiResult<SessionData> {
    if !is_present(&payload.email) || !is_present(&payload.password) {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let Some(user) = state
        .store()
        .find_user_by_email(&email)
        .await
        .map_err(internal_error(ENDPOINT, FAILURE))?
    else {
        verify_unknown_account(&password);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&password, &user.password_hash).map_err(internal_error(ENDPOINT, FAILURE))? {
        tracing::info!("Login failed for user {}", user.id);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = state
        .jwt()
        .issue(&user)
        .map_err(internal_error(ENDPOINT, FAILURE))?;

    Ok(ApiResponse::success(
        "Login successful",
        SessionData {
            token,
            user: user.into(),
        },
    ))
}
