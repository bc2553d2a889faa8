//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage and lookup
//! - [`PgLinkRepository`] - Kept link storage and ownership queries

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
