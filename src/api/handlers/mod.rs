//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod links;
pub mod users;

pub use auth::{login_handler, sign_up_handler};
pub use health::{health_handler, hello_handler};
pub use links::{create_link_handler, my_links_handler};
pub use users::new_user_handler;
