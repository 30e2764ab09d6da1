//! HTTP middleware for request processing and protection.
//!
//! Provides the session guard and request tracing.

pub mod auth;
pub mod tracing;
