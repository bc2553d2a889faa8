//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /sing-up`, `POST /login`, `POST /new-user` - credentials (public)
//! - `POST /new-link`, `GET /my-links`                - links (token required)
//! - `GET  /`, `GET /health`                          - liveness and health (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket; tighter on credential routes
//! - **Authentication** - Token verification on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, hello_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer());

    // Credential routes trigger bcrypt hashing; keep the tighter bucket.
    let credentials = api::routes::credential_routes().layer(rate_limit::secure_layer());

    let router = Router::new()
        .route("/", get(hello_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .merge(credentials)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
