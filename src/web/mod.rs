//! Browser-facing pages.
//!
//! Server-rendered with askama. Forms post back to the page routes; the feed page
//! talks to the JSON API from the browser for post creation, saved locations, and
//! weather.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`middleware`] - Page guard redirecting to `/login`
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
