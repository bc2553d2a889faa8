//! API route configuration.
//!
//! Routes are split into a credential set (public, tightly rate limited),
//! a protected set gated by [`crate::api::middleware::auth`], and liveness
//! routes wired directly by the top-level router.

use crate::api::handlers::{
    create_link_handler, login_handler, my_links_handler, new_user_handler, sign_up_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Credential routes, reachable without a token.
///
/// # Endpoints
///
/// - `POST /sing-up`   - Register and receive a token
/// - `POST /login`     - Exchange credentials for a token
/// - `POST /new-user`  - Create a user without issuing a token
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/sing-up", post(sign_up_handler))
        .route("/login", post(login_handler))
        .route("/new-user", post(new_user_handler))
}

/// Routes requiring token authentication.
///
/// # Endpoints
///
/// - `POST /new-link` - Shorten and keep a link for the caller
/// - `GET  /my-links` - List the caller's links, newest first
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/new-link", post(create_link_handler))
        .route("/my-links", get(my_links_handler))
}
