//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod locations;
pub mod posts;
pub mod weather;
pub mod welcome;

pub use auth::{login_handler, logout_handler, me_handler, register_handler};
pub use health::health_handler;
pub use locations::{
    delete_saved_location_handler, list_saved_locations_handler, save_location_handler,
    search_locations_handler,
};
pub use posts::{create_post_handler, delete_post_handler, list_posts_handler};
pub use weather::weather_handler;
pub use welcome::welcome_handler;
