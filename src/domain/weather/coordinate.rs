//! Validated geographic coordinate.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CoordinateError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NonFinite { field }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// A latitude/longitude pair, validated on construction and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: check("latitude", latitude, 90.0)?,
            longitude: check("longitude", longitude, 180.0)?,
        })
    }

    /// Parses raw query-string values.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, CoordinateError> {
        let lat = parse_field("latitude", latitude)?;
        let lon = parse_field("longitude", longitude)?;
        Self::new(lat, lon)
    }

    /// Like [`Coordinate::parse`], but blank-or-absent on both sides means "no coordinate".
    pub fn parse_optional(
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Option<Self>, CoordinateError> {
        let blank = |v: Option<&str>| v.is_none_or(|s| s.trim().is_empty());
        if blank(latitude) && blank(longitude) {
            return Ok(None);
        }
        Self::parse(latitude, longitude).map(Some)
    }

    /// Builds a coordinate from an optional pair where both or neither must be present.
    pub fn from_pair(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>, CoordinateError> {
        match (latitude, longitude) {
            (None, None) => Ok(None),
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, Some(_)) => Err(CoordinateError::Missing { field: "latitude" }),
            (Some(_), None) => Err(CoordinateError::Missing { field: "longitude" }),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Upstream grid point path, e.g. `/points/40.0066,-105.2633`.
    ///
    /// Values are rounded to four decimals and trailing zeros dropped.
    pub fn points_path(&self) -> String {
        format!(
            "/points/{},{}",
            format_degrees(self.latitude),
            format_degrees(self.longitude)
        )
    }
}

fn check(field: &'static str, value: f64, bound: f64) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite { field });
    }
    if !(-bound..=bound).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            field,
            value,
            min: -bound,
            max: bound,
        });
    }
    Ok(value)
}

fn parse_field(field: &'static str, raw: Option<&str>) -> Result<f64, CoordinateError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(CoordinateError::Missing { field })?;

    raw.parse::<f64>().map_err(|_| CoordinateError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn format_degrees(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
