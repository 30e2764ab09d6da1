//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`http`] - weather upstream client (the JSON fetch primitive)
//! - [`storage`] - local upload directory

pub mod http;
pub mod persistence;
pub mod storage;
