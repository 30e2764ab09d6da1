//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx parameterized
//! queries. Every statement commits independently; no cross-statement transactions.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - user accounts
//! - [`PgSessionRepository`] - login sessions
//! - [`PgPostRepository`] - feed posts
//! - [`PgLocationRepository`] - location catalogue and saved locations

pub mod pg_location_repository;
pub mod pg_post_repository;
pub mod pg_session_repository;
pub mod pg_user_repository;

pub use pg_location_repository::PgLocationRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;
