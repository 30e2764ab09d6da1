//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: counts users
/// 2. **Uploads**: upload directory still exists
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let uploads = check_uploads(&state).await;

    let all_healthy = database.is_ok() && uploads.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, uploads },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.user_service.count().await {
        Ok(users) => CheckStatus::ok(format!("Connected, {users} users")),
        Err(e) => CheckStatus::error(e.to_string()),
    }
}

async fn check_uploads(state: &AppState) -> CheckStatus {
    let dir = state.uploads.root().display().to_string();
    if state.uploads.is_available().await {
        CheckStatus::ok(dir)
    } else {
        CheckStatus::error(format!("Upload directory missing: {dir}"))
    }
}
