//! DTOs for registration and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /sing-up`.
///
/// `last_name` is optional; the original clients did not always send it.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
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

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Response for authentication endpoints.
///
/// Successful sign-up and login answer `{auth: true, token: "..."}`; a
/// failed login answers 401 with `{auth: false, token: null}`.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub auth: bool,
    pub token: Option<String>,
}

impl AuthResponse {
    /// Builds the success body carrying a fresh token.
    pub fn granted(token: String) -> Self {
        Self {
            auth: true,
            token: Some(token),
        }
    }

    /// Builds the rejection body for failed logins.
    pub fn denied() -> Self {
        Self {
            auth: false,
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_validation() {
        let valid = SignUpRequest {
            name: "A".to_string(),
            last_name: None,
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignUpRequest {
            name: "A".to_string(),
            last_name: None,
            email: "not-an-email".to_string(),
            password: "p1".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = SignUpRequest {
            name: "A".to_string(),
            last_name: None,
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_denied_response_shape() {
        let body = serde_json::to_value(AuthResponse::denied()).unwrap();
        assert_eq!(body, serde_json::json!({ "auth": false, "token": null }));
    }
}
