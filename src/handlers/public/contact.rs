// handlers/public/contact.rs - POST /contact handler

use axum::extract::State;
use serde::Deserialize;

use crate::api::JsonBody;
use crate::database::models::NewContactMessage;
use crate::handlers::utils::{internal_error, non_blank, RequiredFields};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub const DEFAULT_SUBJECT: &str = "No Subject";

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// POST /contact - Store a contact-form message
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> ApiResult<()> {
    RequiredFields::new()
        .text("name", &payload.name)
        .text("email", &payload.email)
        .text("message", &payload.message)
        .finish("Name, Email, and Message are required fields")?;

    let message = NewContactMessage {
        subject: non_blank(&payload.subject).unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        name: payload.name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        message: payload.message.unwrap_or_default(),
    };

    state
        .store()
        .insert_contact_message(&message)
        .await
        .map_err(internal_error("Contact API", "An error occurred while saving your message"))?;

    Ok(ApiResponse::message("Your message has been submitted successfully!").created())
}
