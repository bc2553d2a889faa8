//! Handler for direct user creation.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::user::{NewUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user account without issuing a token.
///
/// # Endpoint
///
/// `POST /new-user`
///
/// The password is bcrypt-hashed exactly as in `/sing-up`; the created user
/// is returned without its password hash.
///
/// # Errors
///
/// Returns 400 on validation failure, 409 if the email is already
/// registered.
pub async fn new_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(
            payload.name,
            payload.last_name.unwrap_or_default(),
            payload.email,
            &payload.password,
        )
        .await?;

    Ok(Json(user.into()))
}
