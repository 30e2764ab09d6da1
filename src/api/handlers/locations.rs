//! Handlers for location autocomplete and the saved-locations list.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::location::{
    SaveLocationRequest, SavedListResponse, SearchQuery, SearchResponse,
};
use crate::domain::entities::{Principal, SavedLocation};
use crate::domain::weather::Coordinate;
use crate::error::AppError;
use crate::state::AppState;

/// Autocompletes a location name.
///
/// # Endpoint
///
/// `GET /api/locations/search?q=bou`
///
/// Prefix matches come first, then substring matches, at most 10 items.
pub async fn search_locations_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let items = state.location_service.search(query.q.as_deref()).await?;
    Ok(Json(SearchResponse { items }))
}

/// `GET /api/locations/saved`
pub async fn list_saved_locations_handler(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<SavedListResponse>, AppError> {
    let items = state.location_service.list_saved(&principal).await?;
    Ok(Json(SavedListResponse { items }))
}

/// Saves a location for the principal.
///
/// # Endpoint
///
/// `POST /api/locations/saved`
///
/// ```json
/// { "location": "Boulder, CO", "latitude": 40.0150, "longitude": -105.2705 }
/// ```
///
/// # Errors
///
/// Returns 400 for an invalid label or coordinate, 409 if already saved.
pub async fn save_location_handler(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<SaveLocationRequest>,
) -> Result<(StatusCode, Json<SavedLocation>), AppError> {
    payload.validate()?;
    let coordinate = Coordinate::from_pair(payload.latitude, payload.longitude)?;

    let saved = state
        .location_service
        .save(&principal, payload.location, coordinate)
        .await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// `DELETE /api/locations/saved/{id}`
///
/// Returns 404 unless the saved location belongs to the principal.
pub async fn delete_saved_location_handler(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.location_service.remove(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
