//! Token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// The authenticated caller's user id, injected into request extensions.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

/// Authenticates requests using the token from the `Authorization` header.
///
/// # Header Format
///
/// ```text
/// Authorization: <token>
/// ```
///
/// The header carries the raw token; a `Bearer ` prefix is tolerated for
/// clients that send one.
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Authorization` header
/// 2. Verify the JWT signature and expiry
/// 3. Confirm the token subject still resolves to a stored user
/// 4. Insert [`AuthUser`] into request extensions
/// 5. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The `Authorization` header is missing or empty
/// - The token is malformed, has a bad signature, or has expired
/// - The subject user no longer exists
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/my-links", get(my_links_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::unauthorized(
                "No token provided",
                json!({ "reason": "Authorization header is missing" }),
            )
        })?;

    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    let user_id = st.auth_service.verify_token(token)?;

    // A valid signature is not enough; the subject must still exist.
    st.user_service.find_user(user_id).await?.ok_or_else(|| {
        AppError::unauthorized("Unknown user", json!({ "reason": "Token subject not found" }))
    })?;

    req.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(req).await)
}
