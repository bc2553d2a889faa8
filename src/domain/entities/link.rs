//! Link entity representing a shortened URL kept by a user.

use chrono::{DateTime, Utc};

/// A kept link with its shortened counterpart.
///
/// `url` is the original URL as echoed back by the shortening service and
/// `short_link` is the full short URL (e.g. `https://rel.ink/oTgWwA`).
/// Links are immutable after creation.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub url: String,
    pub short_link: String,
    pub creation_date: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        user_id: i64,
        name: String,
        url: String,
        short_link: String,
        creation_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            url,
            short_link,
            creation_date,
        }
    }

    /// Returns true if this link belongs to the given user.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub user_id: i64,
    pub name: String,
    pub url: String,
    pub short_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            42,
            "My link".to_string(),
            "https://example.com".to_string(),
            "https://rel.ink/oTgWwA".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.user_id, 42);
        assert_eq!(link.short_link, "https://rel.ink/oTgWwA");
        assert_eq!(link.creation_date, now);
    }

    #[test]
    fn test_link_ownership() {
        let link = Link::new(
            1,
            42,
            "n".to_string(),
            "https://example.com".to_string(),
            "https://rel.ink/x".to_string(),
            Utc::now(),
        );

        assert!(link.is_owned_by(42));
        assert!(!link.is_owned_by(7));
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            user_id: 9,
            name: "Docs".to_string(),
            url: "https://rust-lang.org".to_string(),
            short_link: "https://rel.ink/abc".to_string(),
        };

        assert_eq!(new_link.user_id, 9);
        assert_eq!(new_link.name, "Docs");
    }
}
