//! Failure taxonomy for weather resolution.

use serde_json::{Value, json};
use thiserror::Error;

/// Maximum number of characters of an upstream body kept in error excerpts.
pub const EXCERPT_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Caller-supplied data was unusable before any I/O happened.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed URL {resolved:?} (from {original:?}): {reason}")]
    MalformedUrl {
        original: String,
        resolved: String,
        reason: String,
    },

    /// DNS, connect, reset or timeout failures.
    #[error("transport error fetching {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("upstream returned HTTP {status} for {url}: {excerpt}")]
    UpstreamHttp {
        status: u16,
        url: String,
        excerpt: String,
    },

    #[error("could not parse JSON from {url}: {reason}; body starts with {excerpt:?}")]
    ResponseParse {
        url: String,
        reason: String,
        excerpt: String,
    },

    #[error("too many redirects (limit {limit}), last target {last_url}")]
    TooManyRedirects { limit: usize, last_url: String },

    #[error("grid point response has no properties object")]
    InvalidUpstreamShape,

    #[error("grid point response is missing the forecast URL")]
    MissingForecastUrl,

    #[error("grid point response is missing the hourly forecast URL")]
    MissingHourlyUrl,
}

impl WeatherError {
    /// Stable machine-readable code used in the HTTP error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            WeatherError::InvalidInput(_) => "invalid_input",
            WeatherError::MalformedUrl { .. } => "malformed_url",
            WeatherError::Transport { .. } => "transport_error",
            WeatherError::UpstreamHttp { .. } => "upstream_http_error",
            WeatherError::ResponseParse { .. } => "response_parse_error",
            WeatherError::TooManyRedirects { .. } => "too_many_redirects",
            WeatherError::InvalidUpstreamShape => "invalid_upstream_shape",
            WeatherError::MissingForecastUrl => "missing_forecast_url",
            WeatherError::MissingHourlyUrl => "missing_hourly_url",
        }
    }

    pub fn details(&self) -> Value {
        match self {
            WeatherError::UpstreamHttp { status, url, .. } => {
                json!({ "status": status, "url": url })
            }
            WeatherError::MalformedUrl {
                original, resolved, ..
            } => json!({ "original": original, "resolved": resolved }),
            WeatherError::TooManyRedirects { limit, last_url } => {
                json!({ "limit": limit, "last_url": last_url })
            }
            _ => Value::Null,
        }
    }
}

/// Truncates an upstream body to at most [`EXCERPT_LIMIT`] characters.
pub fn excerpt(body: &str) -> String {
    body.chars().take(EXCERPT_LIMIT).collect()
}
