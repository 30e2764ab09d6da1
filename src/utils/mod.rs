//! Utility functions shared across layers.
//!
//! - [`token`] - session token generation and HMAC hashing
//! - [`password`] - Argon2id password hashing
//! - [`cookie`] - session cookie parsing and rendering

pub mod cookie;
pub mod password;
pub mod token;
