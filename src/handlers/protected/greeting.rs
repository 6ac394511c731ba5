// handlers/protected/greeting.rs - GET /protected handler

use axum::Extension;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /protected - Greet the user identified by the bearer token
pub async fn greeting(Extension(user): Extension<AuthUser>) -> ApiResult<()> {
    Ok(ApiResponse::message(format!(
        "Hello {}, this is a protected route.",
        user.firstname
    )))
}
