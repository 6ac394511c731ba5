use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub firstname: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            firstname: claims.firstname,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
///
/// A missing token is a 401; a token that fails verification is a 403.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Access token missing"))?;

    let claims = state.jwt().verify(&token).map_err(|e| {
        tracing::debug!("Rejected access token: {}", e);
        ApiError::forbidden("Invalid token")
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = auth_str.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
