//! External link-shortening service integration.
//!
//! The [`ShortenerService`] trait is the seam between the application layer
//! and the upstream HTTP API; [`RelinkClient`] is the production
//! implementation against rel.ink.

pub mod relink;
pub mod service;

pub use relink::RelinkClient;
pub use service::{Shortened, ShortenerError, ShortenerService};

#[cfg(test)]
pub use service::MockShortenerService;
