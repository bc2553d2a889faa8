//! Shortener service trait and error types.

use async_trait::async_trait;

/// Errors that can occur while talking to the shortening service.
///
/// All variants surface to clients as `502 Bad Gateway` via
/// `crate::error::AppError::Upstream`.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    /// The request never completed (connect failure, timeout, DNS).
    #[error("shortening request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("shortening service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("unexpected shortening response: {0}")]
    Decode(String),
}

/// A successfully shortened URL.
#[derive(Debug, Clone)]
pub struct Shortened {
    /// The original URL as echoed back by the service.
    pub url: String,
    /// The full short URL, e.g. `https://rel.ink/oTgWwA`.
    pub short_url: String,
}

/// Trait for shortening long URLs through an external service.
///
/// # Implementations
///
/// - [`crate::infrastructure::shortener::RelinkClient`] - rel.ink HTTP client
/// - Test fakes implement this trait directly in integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerService: Send + Sync {
    /// Shortens a single URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError`] on transport failures, non-success
    /// responses, or undecodable payloads. No retries are attempted.
    async fn shorten(&self, url: &str) -> Result<Shortened, ShortenerError>;
}
