// handlers/public/status.rs - GET / and GET /health

use axum::extract::State;
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub database: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET / - Liveness; never touches the database
pub async fn root() -> ApiResult<()> {
    Ok(ApiResponse::message("API is running"))
}

/// GET /health - Readiness; pings the database
pub async fn health(State(state): State<AppState>) -> ApiResult<HealthData> {
    match state.store().ping().await {
        Ok(()) => Ok(ApiResponse::success(
            "ok",
            HealthData {
                database: "ok",
                timestamp: chrono::Utc::now(),
            },
        )),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            Err(ApiError::service_unavailable("Database unavailable"))
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
