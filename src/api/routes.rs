//! API route configuration.
//!
//! Mounted under `/api`. Public routes handle account and session lifecycle; the
//! rest require a session resolved by [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_post_handler, delete_post_handler, delete_saved_location_handler,
    list_posts_handler, list_saved_locations_handler, login_handler, logout_handler,
    me_handler, register_handler, save_location_handler, search_locations_handler,
    weather_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Open a session (sets the session cookie)
/// - `POST /logout`   - Close the current session, if any
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Routes requiring a session.
///
/// # Endpoints
///
/// - `GET    /me`                    - Current principal
/// - `GET    /weather`               - Weather snapshot for `lat`/`lon`
/// - `GET    /posts`                 - Feed (paginated)
/// - `POST   /posts`                 - Create a post (multipart, capped at `max_upload_bytes`)
/// - `DELETE /posts/{id}`            - Delete an owned post
/// - `GET    /locations/search`      - Location autocomplete
/// - `GET    /locations/saved`       - Saved locations
/// - `POST   /locations/saved`       - Save a location
/// - `DELETE /locations/saved/{id}`  - Remove a saved location
pub fn protected_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/me", get(me_handler))
        .route("/weather", get(weather_handler))
        .route(
            "/posts",
            get(list_posts_handler)
                .post(create_post_handler)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/posts/{id}", delete(delete_post_handler))
        .route("/locations/search", get(search_locations_handler))
        .route(
            "/locations/saved",
            get(list_saved_locations_handler).post(save_location_handler),
        )
        .route(
            "/locations/saved/{id}",
            delete(delete_saved_location_handler),
        )
}
