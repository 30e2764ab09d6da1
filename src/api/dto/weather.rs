//! Query parameters for the weather endpoint.

use serde::Deserialize;

/// `GET /api/weather?lat=&lon=`
///
/// Kept as raw strings so that missing and non-numeric values are reported by
/// [`crate::domain::weather::Coordinate::parse`] with the offending field named.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}
