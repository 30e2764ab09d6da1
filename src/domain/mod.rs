//! Domain layer containing business entities and ports.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access and file storage trait definitions
//! - [`weather`] - Weather value types, error taxonomy and the fetch port
//!
//! The domain layer has no dependencies on the web or infrastructure layers;
//! implementations of its traits live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod weather;
