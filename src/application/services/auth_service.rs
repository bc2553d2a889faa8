//! Authentication service: registration, login, and token verification.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// JWT claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: i64,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Service for the credential lifecycle.
///
/// Passwords are bcrypt-hashed with a per-user salt before storage. Tokens
/// are HS256-signed JWTs carrying the user id, valid for `token_ttl_seconds`
/// (24 hours by default).
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    signing_secret: String,
    token_ttl_seconds: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository for account lookups and creation
    /// - `signing_secret` - HS256 key; tokens signed with a different secret
    ///   never verify
    /// - `token_ttl_seconds` - token lifetime from the moment of issue
    pub fn new(users: Arc<dyn UserRepository>, signing_secret: String, token_ttl_seconds: i64) -> Self {
        Self {
            users,
            signing_secret,
            token_ttl_seconds,
        }
    }

    /// Registers a new user and issues a token for the fresh account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing, signing, or database errors.
    pub async fn register(
        &self,
        name: String,
        last_name: String,
        email: String,
        password: &str,
    ) -> Result<(User, String), AppError> {
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                name,
                last_name,
                email,
                password_hash,
            })
            .await?;

        let token = self.issue_token(user.id)?;

        tracing::info!(user_id = user.id, "registered new user");

        Ok((user, token))
    }

    /// Verifies credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account exists for the email.
    /// Returns [`AppError::Unauthorized`] if the password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Email not found", json!({ "email": email })))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized(
                "Invalid credentials",
                json!({ "reason": "Password mismatch" }),
            ));
        }

        self.issue_token(user.id)
    }

    /// Decodes and validates a token, returning the subject user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, has an
    /// invalid signature, or has expired.
    pub fn verify_token(&self, token: &str) -> Result<i64, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.signing_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                AppError::unauthorized("Token expired", json!({ "reason": "Token expired" }))
            }
            _ => AppError::unauthorized("Invalid token", json!({ "reason": e.to_string() })),
        })?;

        Ok(data.claims.sub)
    }

    /// Signs a fresh token for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.token_ttl_seconds,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.signing_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("token signing error: {e}");
            AppError::internal("Token signing failed", json!({}))
        })
    }
}
