//! HTTP client for the rel.ink shortening API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infrastructure::shortener::{Shortened, ShortenerError, ShortenerService};

/// Upper bound on a single shortening request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ShortenPayload<'a> {
    url: &'a str,
}

/// Response body of `POST {base}/api/links/`.
#[derive(Debug, Deserialize)]
struct RelinkResponse {
    hashid: String,
    url: String,
}

/// rel.ink API client.
///
/// One POST per shortened URL; the short link is composed from the service
/// base URL and the returned `hashid`.
pub struct RelinkClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelinkClient {
    /// Creates a client for the service at `base_url` (e.g. `https://rel.ink`).
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: String) -> Result<Self, ShortenerError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ShortenerError::Transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/links/", self.base_url.trim_end_matches('/'))
    }
}

/// Composes the full short URL from the service base and a hashid.
fn make_short_url(base_url: &str, hashid: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), hashid)
}

#[async_trait]
impl ShortenerService for RelinkClient {
    async fn shorten(&self, url: &str) -> Result<Shortened, ShortenerError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&ShortenPayload { url })
            .send()
            .await
            .map_err(|e| ShortenerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShortenerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: RelinkResponse = response
            .json()
            .await
            .map_err(|e| ShortenerError::Decode(e.to_string()))?;

        Ok(Shortened {
            short_url: make_short_url(&self.base_url, &body.hashid),
            url: body.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_short_url() {
        assert_eq!(
            make_short_url("https://rel.ink", "oTgWwA"),
            "https://rel.ink/oTgWwA"
        );
    }

    #[test]
    fn test_make_short_url_trims_trailing_slash() {
        assert_eq!(
            make_short_url("https://rel.ink/", "oTgWwA"),
            "https://rel.ink/oTgWwA"
        );
    }

    #[test]
    fn test_endpoint_composition() {
        let client = RelinkClient::new("https://rel.ink".to_string()).unwrap();
        assert_eq!(client.endpoint(), "https://rel.ink/api/links/");

        let client = RelinkClient::new("https://rel.ink/".to_string()).unwrap();
        assert_eq!(client.endpoint(), "https://rel.ink/api/links/");
    }
}
