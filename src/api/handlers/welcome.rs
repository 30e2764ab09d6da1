//! Public greeting endpoint.

use axum::Json;

use crate::api::dto::welcome::WelcomeResponse;

/// `GET /welcome`
///
/// Touches no shared state, so it answers the same regardless of sessions or
/// database contents.
pub async fn welcome_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome!",
    })
}
