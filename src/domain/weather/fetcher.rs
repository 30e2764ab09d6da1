//! Port for the outbound JSON fetch primitive.

use async_trait::async_trait;
use serde_json::Value;

use super::WeatherError;

/// Fetches a JSON document from the weather upstream.
///
/// `url_or_path` is either an absolute `http(s)://` URL or a path relative to the
/// upstream base host. Implementations follow redirects themselves and report every
/// failure through [`WeatherError`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::NwsClient`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url_or_path: &str) -> Result<Value, WeatherError>;
}
