//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, UserService};

/// Handle to the application services, cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        auth_service: Arc<AuthService>,
        user_service: Arc<UserService>,
        link_service: Arc<LinkService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            link_service,
        }
    }
}
