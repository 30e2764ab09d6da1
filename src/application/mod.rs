//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and business rules, and give HTTP
//! handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - login, session resolution, logout
//! - [`services::user_service::UserService`] - registration
//! - [`services::post_service::PostService`] - feed, post creation with uploads, deletion
//! - [`services::location_service::LocationService`] - autocomplete and saved locations
//! - [`services::weather_service::WeatherService`] - grid → daily → hourly resolution

pub mod services;
