//! DTOs for user management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Request body for `POST /new-user`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// A user as returned to clients. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub register_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            register_date: user.register_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            1,
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            "$2b$12$secret".to_string(),
            Utc::now(),
        );

        let body = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(body["email"], "ada@example.com");
        assert!(body.get("password_hash").is_none());
        assert!(body.get("password").is_none());
    }
}
