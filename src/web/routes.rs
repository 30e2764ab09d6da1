//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    feed_handler, login_page_handler, login_submit_handler, logout_submit_handler,
    register_page_handler, register_submit_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Pages requiring a session, guarded by [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /` - Feed
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(feed_handler))
}

/// Pages reachable without a session.
///
/// # Endpoints
///
/// - `GET|POST /login`
/// - `GET|POST /register`
/// - `POST /logout`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route(
            "/register",
            get(register_page_handler).post(register_submit_handler),
        )
        .route("/logout", post(logout_submit_handler))
}
