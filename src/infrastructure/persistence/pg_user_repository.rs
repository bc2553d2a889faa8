//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user accounts.
///
/// Email uniqueness is enforced by a unique index; violations surface as
/// [`AppError::Conflict`] through the shared `sqlx::Error` conversion.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User::new(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("last_name")?,
        row.try_get("email")?,
        row.try_get("password_hash")?,
        row.try_get("register_date")?,
    ))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, last_name, email, password_hash, register_date
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row_to_user(&row)?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, last_name, email, password_hash, register_date
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(row_to_user).transpose()?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, last_name, email, password_hash, register_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(row_to_user).transpose()?)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, last_name, email, password_hash, register_date
            FROM users
            ORDER BY register_date DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let users = rows
            .iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
