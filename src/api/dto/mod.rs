//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies that
//! carry free text are checked with `validator`.

pub mod auth;
pub mod health;
pub mod location;
pub mod pagination;
pub mod post;
pub mod weather;
pub mod welcome;
