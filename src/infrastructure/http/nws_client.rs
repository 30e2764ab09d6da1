//! JSON fetch primitive for the weather upstream (api.weather.gov).
//!
//! Issues one GET per hop with a fixed `User-Agent` and `Accept: application/json`,
//! follows redirects itself up to a configured cap, and maps every failure onto
//! [`WeatherError`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, LOCATION};
use reqwest::{Client, StatusCode, redirect};
use serde_json::Value;
use url::Url;

use crate::domain::weather::error::excerpt;
use crate::domain::weather::{JsonFetcher, WeatherError};

/// Default upstream base host.
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";

/// Default redirect hop cap.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Settings for [`NwsClient`].
#[derive(Debug, Clone)]
pub struct NwsClientConfig {
    pub base_url: String,
    /// Identifying header value: agent id plus contact, e.g. `skyfeed/0.1 (ops@example.com)`.
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for NwsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("skyfeed/{} (contact@skyfeed.local)", env!("CARGO_PKG_VERSION"))
}

/// reqwest-backed [`JsonFetcher`].
///
/// Automatic redirect following is disabled on the underlying client so hops are
/// counted here and bounded by `max_redirects`.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
    max_redirects: usize,
}

impl NwsClient {
    /// Builds a client.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::MalformedUrl`] if `base_url` does not parse and
    /// [`WeatherError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(config: NwsClientConfig) -> Result<Self, WeatherError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();

        Url::parse(&base_url).map_err(|e| WeatherError::MalformedUrl {
            original: config.base_url.clone(),
            resolved: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .user_agent(config.user_agent)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| WeatherError::Transport {
                url: base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            max_redirects: config.max_redirects,
        })
    }

    /// Resolves an absolute URL or a base-relative path.
    ///
    /// Relative input is joined to the base host with exactly one `/`, whether or
    /// not it starts with one.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::InvalidInput`] for empty or all-whitespace input
    /// - [`WeatherError::MalformedUrl`] if the resolved string does not parse
    pub fn resolve(&self, url_or_path: &str) -> Result<Url, WeatherError> {
        let trimmed = url_or_path.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::InvalidInput(
                "URL must be a non-empty string".to_string(),
            ));
        }

        let resolved = if has_http_scheme(trimmed) {
            trimmed.to_string()
        } else {
            format!("{}/{}", self.base_url, trimmed.trim_start_matches('/'))
        };

        Url::parse(&resolved).map_err(|e| WeatherError::MalformedUrl {
            original: url_or_path.to_string(),
            resolved,
            reason: e.to_string(),
        })
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response, WeatherError> {
        self.client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "weather upstream unreachable");
                WeatherError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })
    }
}

#[async_trait]
impl JsonFetcher for NwsClient {
    async fn fetch_json(&self, url_or_path: &str) -> Result<Value, WeatherError> {
        let mut url = self.resolve(url_or_path)?;
        let mut hops = 0;

        loop {
            tracing::debug!(url = %url, "fetching weather resource");

            let response = self.get(&url).await?;
            let status = response.status();

            if status.is_redirection()
                && let Some(location) = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
            {
                if hops >= self.max_redirects {
                    return Err(WeatherError::TooManyRedirects {
                        limit: self.max_redirects,
                        last_url: url.to_string(),
                    });
                }

                let next = url.join(location).map_err(|e| WeatherError::MalformedUrl {
                    original: location.to_string(),
                    resolved: location.to_string(),
                    reason: e.to_string(),
                })?;

                hops += 1;
                tracing::debug!(from = %url, to = %next, hop = hops, "following redirect");
                url = next;
                continue;
            }

            let body = response.text().await.map_err(|e| WeatherError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

            if status != StatusCode::OK {
                tracing::warn!(url = %url, status = status.as_u16(), "weather upstream error");
                return Err(WeatherError::UpstreamHttp {
                    status: status.as_u16(),
                    url: url.to_string(),
                    excerpt: excerpt(&body),
                });
            }

            return serde_json::from_str(&body).map_err(|e| WeatherError::ResponseParse {
                url: url.to_string(),
                reason: e.to_string(),
                excerpt: excerpt(&body),
            });
        }
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
