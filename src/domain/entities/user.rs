//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `password_hash` holds the bcrypt hash of the password supplied at
/// registration; the raw password is never stored. The hash must not leak
/// into API responses (see `crate::api::dto::user::UserResponse`).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub register_date: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        name: String,
        last_name: String,
        email: String,
        password_hash: String,
        register_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            last_name,
            email,
            password_hash,
            register_date,
        }
    }

    /// Returns the user's display name: "name last_name", or just the first
    /// name when no last name was supplied.
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.last_name)
        }
    }
}

/// Input data for creating a new user.
///
/// `password_hash` is expected to already be bcrypt-hashed; every creation
/// path goes through `crate::utils::password::hash_password`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}
