//! Handlers for registration and login endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::auth::{AuthResponse, LoginRequest, SignUpRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user and returns a token for the fresh account.
///
/// # Endpoint
///
/// `POST /sing-up`
///
/// The route spelling is a compatibility artifact; existing clients depend
/// on it.
///
/// # Response
///
/// ```json
/// { "auth": true, "token": "<jwt>" }
/// ```
///
/// # Errors
///
/// Returns 400 on validation failure, 409 if the email is already
/// registered, 500 on persistence errors.
pub async fn sign_up_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let (_, token) = state
        .auth_service
        .register(
            payload.name,
            payload.last_name.unwrap_or_default(),
            payload.email,
            &payload.password,
        )
        .await?;

    Ok(Json(AuthResponse::granted(token)))
}

/// Verifies credentials and returns a token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Responses
///
/// - `200 {auth: true, token}` on success
/// - `404` when no account exists for the email
/// - `401 {auth: false, token: null}` when the password does not match
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    match state
        .auth_service
        .login(&payload.email, &payload.password)
        .await
    {
        Ok(token) => Ok(Json(AuthResponse::granted(token)).into_response()),
        Err(AppError::Unauthorized { .. }) => {
            Ok((StatusCode::UNAUTHORIZED, Json(AuthResponse::denied())).into_response())
        }
        Err(other) => Err(other),
    }
}
