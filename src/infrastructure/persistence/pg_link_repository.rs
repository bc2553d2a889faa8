//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for kept links.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn row_to_link(row: &PgRow) -> Result<Link, sqlx::Error> {
    Ok(Link::new(
        row.try_get("id")?,
        row.try_get("user_id")?,
        row.try_get("name")?,
        row.try_get("url")?,
        row.try_get("short_link")?,
        row.try_get("creation_date")?,
    ))
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO links (user_id, name, url, short_link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, url, short_link, creation_date
            "#,
        )
        .bind(new_link.user_id)
        .bind(&new_link.name)
        .bind(&new_link.url)
        .bind(&new_link.short_link)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row_to_link(&row)?)
    }

    async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, url, short_link, creation_date
            FROM links
            WHERE user_id = $1
            ORDER BY creation_date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let links = rows
            .iter()
            .map(row_to_link)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
