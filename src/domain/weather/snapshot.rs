//! Grid point descriptor and the assembled weather snapshot.

use serde::Serialize;
use serde_json::Value;

use super::WeatherError;

/// City/state label for a grid point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceLabel {
    pub city: String,
    pub state: String,
}

impl PlaceLabel {
    pub fn unknown() -> Self {
        Self {
            city: "Unknown".to_string(),
            state: "Unknown".to_string(),
        }
    }
}

/// Upstream metadata locating a coordinate within a forecast grid.
///
/// Both URLs are required; construction fails closed when either is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    pub forecast_url: String,
    pub hourly_url: String,
    pub relative_location: Option<PlaceLabel>,
}

impl GridPoint {
    /// Extracts a grid point from a `/points/{lat},{lon}` response.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::InvalidUpstreamShape`] when `properties` is not an object
    /// - [`WeatherError::MissingForecastUrl`] when `properties.forecast` is absent or empty
    /// - [`WeatherError::MissingHourlyUrl`] when `properties.forecastHourly` is absent or empty
    pub fn from_points_response(value: &Value) -> Result<Self, WeatherError> {
        let properties = value
            .get("properties")
            .and_then(Value::as_object)
            .ok_or(WeatherError::InvalidUpstreamShape)?;

        let forecast_url = non_empty_str(properties.get("forecast"))
            .ok_or(WeatherError::MissingForecastUrl)?;
        let hourly_url = non_empty_str(properties.get("forecastHourly"))
            .ok_or(WeatherError::MissingHourlyUrl)?;

        let relative_location = properties
            .get("relativeLocation")
            .and_then(|rl| rl.get("properties"))
            .and_then(Value::as_object)
            .map(|p| PlaceLabel {
                city: non_empty_str(p.get("city")).unwrap_or("Unknown").to_string(),
                state: non_empty_str(p.get("state")).unwrap_or("Unknown").to_string(),
            });

        Ok(Self {
            forecast_url: forecast_url.to_string(),
            hourly_url: hourly_url.to_string(),
            relative_location,
        })
    }
}

/// Weather result returned to the caller.
///
/// `current` is the first hourly period, `forecast` the daily periods verbatim.
/// Periods are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub location: PlaceLabel,
    pub current: Option<Value>,
    pub forecast: Vec<Value>,
    pub units: String,
}

impl WeatherSnapshot {
    /// Assembles a snapshot from a resolved grid point and the daily/hourly payloads.
    ///
    /// Payload shape deviations degrade to defaults: no hourly periods gives
    /// `current: None`, missing daily periods or units give empty values.
    pub fn assemble(grid: GridPoint, daily: &Value, hourly: &Value) -> Self {
        let current = periods(hourly).and_then(|p| p.first().cloned());
        let forecast = periods(daily).cloned().unwrap_or_default();
        let units = daily
            .get("properties")
            .and_then(|p| p.get("units"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            location: grid.relative_location.unwrap_or_else(PlaceLabel::unknown),
            current,
            forecast,
            units,
        }
    }
}

fn periods(payload: &Value) -> Option<&Vec<Value>> {
    payload
        .get("properties")
        .and_then(|p| p.get("periods"))
        .and_then(Value::as_array)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
