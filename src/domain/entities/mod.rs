//! Core domain entities.
//!
//! Entities are plain data structures mirroring database rows. Creation inputs use
//! separate `New*` structs.
//!
//! - [`User`] - registered account
//! - [`Session`] - login session keyed by a hashed token
//! - [`Principal`] - authenticated identity carried through a request
//! - [`Post`] - feed entry with optional image and location
//! - [`Location`] / [`SavedLocation`] - autocomplete catalogue and per-user saved list

pub mod location;
pub mod post;
pub mod session;
pub mod user;

pub use location::{Location, NewSavedLocation, SavedLocation};
pub use post::{NewPost, Post};
pub use session::{NewSession, Principal, Session};
pub use user::{NewUser, User};
