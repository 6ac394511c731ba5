// handlers/public/signup.rs - POST /signup handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::JsonBody;
use crate::auth::password::hash_password;
use crate::database::models::{NewUser, PublicUser};
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::handlers::utils::{internal_error, parse_date, RequiredFields};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

const ENDPOINT: &str = "Signup";
const FAILURE: &str = "Internal server error";

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub dob: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionData {
    pub token: String,
    pub user: PublicUser,
}

/// POST /signup - Register a new user and receive a JWT token
///
/// Every field is mandatory. An email that already exists is rejected with
/// 400 "User already exists"; otherwise the user is inserted, read back by
/// email and returned (without the password hash) alongside a token.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SignupRequest>,
) -> ApiResult<SessionData> {
    RequiredFields::new()
        .text("firstname", &payload.firstname)
        .text("lastname", &payload.lastname)
        .text("email", &payload.email)
        .text("password", &payload.password)
        .text("address", &payload.address)
        .text("gender", &payload.gender)
        .text("country", &payload.country)
        .text("dob", &payload.dob)
        .finish("All fields including DOB are required")?;

    let dob = parse_date("dob", payload.dob.as_deref().unwrap_or_default())?;
    let email = payload.email.unwrap_or_default();

    let store = state.store();

    if store
        .find_user_by_email(&email)
        .await
        .map_err(internal_error(ENDPOINT, FAILURE))?
        .is_some()
    {
        tracing::info!("Signup rejected: email already registered");
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash_password(&payload.password.unwrap_or_default())
        .map_err(internal_error(ENDPOINT, FAILURE))?;

    let new_user = NewUser {
        firstname: payload.firstname.unwrap_or_default(),
        lastname: payload.lastname.unwrap_or_default(),
        email,
        password_hash,
        address: payload.address.unwrap_or_default(),
        gender: payload.gender.unwrap_or_default(),
        country: payload.country.unwrap_or_default(),
        dob,
    };

    // A concurrent signup for the same email can land between the check and the insert
    store.insert_user(&new_user).await.map_err(|err| match err {
        DatabaseError::Duplicate(_) => {
            tracing::info!("Signup rejected: email registered concurrently");
            ApiError::conflict("User already exists")
        }
        other => internal_error(ENDPOINT, FAILURE)(other),
    })?;

    // Read back the row to pick up the generated id
    let user = store
        .find_user_by_email(&new_user.email)
        .await
        .map_err(internal_error(ENDPOINT, FAILURE))?
        .ok_or_else(|| {
            tracing::error!("Signup error: inserted user {} not found on re-select", new_user.email);
            ApiError::internal_server_error(FAILURE)
        })?;

    let token = state
        .jwt()
        .issue(&user)
        .map_err(internal_error(ENDPOINT, FAILURE))?;

    tracing::info!("Registered user {}", user.id);

    Ok(ApiResponse::success(
        "User registered successfully",
        SessionData {
            token,
            user: user.into(),
        },
    )
    .created())
}
