use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success envelope: `{ "message": ..., ...payload fields }`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: Option<T>,
    pub status_code: Option<StatusCode>,
}

impl ApiResponse<()> {
    /// A response that carries only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            status_code: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status_code: None,
        }
    }

    /// Override the response status code
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Mark the response as 201 Created
    pub fn created(self) -> Self {
        self.with_status(StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        let mut envelope = Map::new();
        envelope.insert("message".to_string(), Value::String(self.message));

        if let Some(data) = self.data {
            match serde_json::to_value(&data) {
                Ok(Value::Object(fields)) => {
                    for (key, value) in fields {
                        if key != "message" {
                            envelope.insert(key, value);
                        }
                    }
                }
                Ok(Value::Null) => {}
                Ok(other) => {
                    envelope.insert("data".to_string(), other);
                }
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "message": "Failed to serialize response data",
                            "code": "INTERNAL_SERVER_ERROR"
                        })),
                    )
                        .into_response();
                }
            }
        }

        (status, Json(Value::Object(envelope))).into_response()
    }
}

// Convenience type alias
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
