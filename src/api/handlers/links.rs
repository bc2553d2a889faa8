//! Handlers for the authenticated link endpoints.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL and keeps the resulting link for the caller.
///
/// # Endpoint
///
/// `POST /new-link` (requires `Authorization` token)
///
/// # Request Body
///
/// ```json
/// { "name": "My link", "url": "https://example.com/long/path" }
/// ```
///
/// # Errors
///
/// Returns 400 on an invalid URL, 401 without a valid token, 502 when the
/// shortening service fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(user_id, payload.name, &payload.url)
        .await?;

    Ok(Json(link.into()))
}

/// Lists the caller's kept links, newest first.
///
/// # Endpoint
///
/// `GET /my-links` (requires `Authorization` token)
pub async fn my_links_handler(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links(user_id).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
