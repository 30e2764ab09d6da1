//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL implementations live in
//! `crate::infrastructure::persistence` and mocks are generated via `mockall`.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - user accounts
//! - [`SessionRepository`] - login sessions
//! - [`PostRepository`] - feed posts
//! - [`LocationRepository`] - location catalogue and saved locations
//! - [`ImageStore`] - uploaded image files
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod image_store;
pub mod location_repository;
pub mod post_repository;
pub mod session_repository;
pub mod user_repository;

pub use image_store::ImageStore;
pub use location_repository::LocationRepository;
pub use post_repository::PostRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use image_store::MockImageStore;
#[cfg(test)]
pub use location_repository::MockLocationRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
