//! Business logic services for the application layer.

pub mod auth_service;
pub mod location_service;
pub mod post_service;
pub mod user_service;
pub mod weather_service;

pub use auth_service::{AuthService, LoginOutcome};
pub use location_service::LocationService;
pub use post_service::{ImageUpload, PostDraft, PostService};
pub use user_service::UserService;
pub use weather_service::WeatherService;
