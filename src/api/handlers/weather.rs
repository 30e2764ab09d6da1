//! Handler for the weather proxy endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::weather::WeatherQuery;
use crate::domain::entities::Principal;
use crate::domain::weather::{Coordinate, WeatherSnapshot};
use crate::error::AppError;
use crate::state::AppState;

/// Returns current conditions and the forecast for a coordinate.
///
/// # Endpoint
///
/// `GET /api/weather?lat={lat}&lon={lon}` (session required)
///
/// # Response
///
/// ```json
/// {
///   "location": { "city": "Boulder", "state": "CO" },
///   "current": { "name": "", "temperature": 54, "temperatureUnit": "F", ... },
///   "forecast": [ { "name": "Tonight", ... }, ... ],
///   "units": "us"
/// }
/// ```
///
/// # Errors
///
/// - 400 if `lat`/`lon` is missing, not a number, or out of range; no upstream call
///   is made
/// - 500 `{"error": "Failed to fetch weather data", "code": ..., "message": ...}` for
///   any upstream failure
pub async fn weather_handler(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherSnapshot>, AppError> {
    let coordinate = Coordinate::parse(query.lat.as_deref(), query.lon.as_deref())?;

    tracing::info!(
        user_id = principal.user_id,
        lat = coordinate.latitude(),
        lon = coordinate.longitude(),
        "weather requested"
    );

    let snapshot = state.weather_service.current_weather(coordinate).await?;

    Ok(Json(snapshot))
}
