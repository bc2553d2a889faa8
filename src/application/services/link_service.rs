//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::shortener::ShortenerService;

/// Service for creating and listing a user's kept links.
///
/// Creation is a two-step flow: shorten through the external service, then
/// persist the returned short link together with the supplied metadata and
/// the authenticated owner id. Nothing is persisted when shortening fails.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    shortener: Arc<dyn ShortenerService>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>, shortener: Arc<dyn ShortenerService>) -> Self {
        Self { links, shortener }
    }

    /// Shortens `url` and persists the resulting link for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the shortening service fails.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(
        &self,
        user_id: i64,
        name: String,
        url: &str,
    ) -> Result<Link, AppError> {
        let shortened = self.shortener.shorten(url).await?;

        let link = self
            .links
            .create(NewLink {
                user_id,
                name,
                url: shortened.url,
                short_link: shortened.short_url,
            })
            .await?;

        tracing::info!(user_id, link_id = link.id, "created link");

        Ok(link)
    }

    /// Returns all links owned by `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self, user_id: i64) -> Result<Vec<Link>, AppError> {
        self.links.list_by_owner(user_id).await
    }

    /// Counts all links in the system.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.links.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::shortener::{MockShortenerService, Shortened, ShortenerError};
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_link_persists_short_link() {
        let mut mock_links = MockLinkRepository::new();
        let mut mock_shortener = MockShortenerService::new();

        mock_shortener
            .expect_shorten()
            .withf(|url| url == "http://x")
            .times(1)
            .returning(|_| {
                Ok(Shortened {
                    url: "http://x".to_string(),
                    short_url: "https://rel.ink/oTgWwA".to_string(),
                })
            });

        mock_links
            .expect_create()
            .withf(|new_link| {
                new_link.user_id == 42
                    && new_link.name == "L1"
                    && new_link.short_link == "https://rel.ink/oTgWwA"
            })
            .times(1)
            .returning(|new_link| {
                Ok(Link::new(
                    1,
                    new_link.user_id,
                    new_link.name,
                    new_link.url,
                    new_link.short_link,
                    Utc::now(),
                ))
            });

        let service = LinkService::new(Arc::new(mock_links), Arc::new(mock_shortener));

        let link = service
            .create_link(42, "L1".to_string(), "http://x")
            .await
            .unwrap();

        assert_eq!(link.user_id, 42);
        assert!(link.short_link.starts_with("https://rel.ink/"));
    }

    #[tokio::test]
    async fn test_create_link_upstream_failure_persists_nothing() {
        let mut mock_links = MockLinkRepository::new();
        let mut mock_shortener = MockShortenerService::new();

        mock_shortener.expect_shorten().times(1).returning(|_| {
            Err(ShortenerError::Api {
                status: 500,
                body: "server error".to_string(),
            })
        });

        mock_links.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_links), Arc::new(mock_shortener));

        let result = service.create_link(42, "L1".to_string(), "http://x").await;

        assert!(matches!(result.unwrap_err(), AppError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_list_links_scoped_to_owner() {
        let mut mock_links = MockLinkRepository::new();
        let mock_shortener = MockShortenerService::new();

        mock_links
            .expect_list_by_owner()
            .withf(|user_id| *user_id == 7)
            .times(1)
            .returning(|user_id| {
                Ok(vec![Link::new(
                    1,
                    user_id,
                    "only mine".to_string(),
                    "http://x".to_string(),
                    "https://rel.ink/a".to_string(),
                    Utc::now(),
                )])
            });

        let service = LinkService::new(Arc::new(mock_links), Arc::new(mock_shortener));

        let links = service.list_links(7).await.unwrap();

        assert_eq!(links.len(), 1);
        assert!(links[0].is_owned_by(7));
    }
}
