//! User account management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Service for account creation and lookup outside the login flow.
///
/// Backs the `/new-user` endpoint and the admin CLI. Passwords are hashed
/// here exactly as in registration; no creation path stores a raw password.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates a user account without issuing a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn create_user(
        &self,
        name: String,
        last_name: String,
        email: String,
        password: &str,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        self.users
            .create(NewUser {
                name,
                last_name,
                email,
                password_hash,
            })
            .await
    }

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        self.users.find_by_id(id).await
    }

    /// Lists all users, newest registration first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Counts registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.users.count().await
    }
}
