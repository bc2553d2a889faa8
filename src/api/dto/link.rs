//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /new-link`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A kept link as returned to clients.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub url: String,
    pub short_link: String,
    pub creation_date: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            user_id: link.user_id,
            name: link.name,
            url: link.url,
            short_link: link.short_link,
            creation_date: link.creation_date,
        }
    }
}
