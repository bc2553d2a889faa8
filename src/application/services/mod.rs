//! Business logic services for the application layer.

pub mod auth_service;
pub mod link_service;
pub mod user_service;

pub use auth_service::{AuthService, Claims};
pub use link_service::LinkService;
pub use user_service::UserService;
