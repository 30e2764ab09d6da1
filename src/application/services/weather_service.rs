//! Weather resolution pipeline: grid point → daily forecast → hourly forecast.

use std::sync::Arc;

use crate::domain::weather::{Coordinate, GridPoint, JsonFetcher, WeatherError, WeatherSnapshot};

/// Resolves current weather for a coordinate through three sequential upstream calls.
///
/// # Failure policy
///
/// - Stage 1 (grid point) is a hard precondition: fetch failures and missing
///   `properties`/forecast/hourly URLs abort with the originating error.
/// - Stages 2 and 3: fetch failures also abort, but an unexpected payload shape
///   degrades to defaults during assembly (see [`WeatherSnapshot::assemble`]).
pub struct WeatherService<F: JsonFetcher> {
    fetcher: Arc<F>,
}

impl<F: JsonFetcher> WeatherService<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    pub async fn current_weather(
        &self,
        coordinate: Coordinate,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let points = self.fetcher.fetch_json(&coordinate.points_path()).await?;
        let grid = GridPoint::from_points_response(&points)?;

        tracing::debug!(
            forecast = %grid.forecast_url,
            hourly = %grid.hourly_url,
            "resolved grid point"
        );

        let daily = self.fetcher.fetch_json(&grid.forecast_url).await?;
        let hourly = self.fetcher.fetch_json(&grid.hourly_url).await?;

        Ok(WeatherSnapshot::assemble(grid, &daily, &hourly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::MockJsonFetcher;
    use mockall::Sequence;
    use serde_json::json;

    const FORECAST: &str = "https://api.weather.gov/gridpoints/BOU/53,74/forecast";
    const HOURLY: &str = "https://api.weather.gov/gridpoints/BOU/53,74/forecast/hourly";

    fn boulder() -> Coordinate {
        Coordinate::new(40.0066, -105.2633).unwrap()
    }

    #[tokio::test]
    async fn test_missing_properties_stops_after_stage_one() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher
            .expect_fetch_json()
            .withf(|url| url == "/points/40.0066,-105.2633")
            .times(1)
            .returning(|_| Ok(json!({ "status": 200 })));

        let err = WeatherService::new(Arc::new(fetcher))
            .current_weather(boulder())
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::InvalidUpstreamShape));
    }

    #[tokio::test]
    async fn test_missing_forecast_url() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher
            .expect_fetch_json()
            .times(1)
            .returning(|_| Ok(json!({ "properties": { "forecastHourly": HOURLY } })));

        let err = WeatherService::new(Arc::new(fetcher))
            .current_weather(boulder())
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::MissingForecastUrl));
    }

    #[tokio::test]
    async fn test_missing_hourly_url() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher
            .expect_fetch_json()
            .times(1)
            .returning(|_| Ok(json!({ "properties": { "forecast": FORECAST } })));

        let err = WeatherService::new(Arc::new(fetcher))
            .current_weather(boulder())
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::MissingHourlyUrl));
    }

    #[tokio::test]
    async fn test_stage_one_error_surfaces_untouched() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher.expect_fetch_json().times(1).returning(|_| {
            Err(WeatherError::UpstreamHttp {
                status: 404,
                url: "https://api.weather.gov/points/0,0".to_string(),
                excerpt: "Not Found".to_string(),
            })
        });

        let err = WeatherService::new(Arc::new(fetcher))
            .current_weather(Coordinate::new(0.0, 0.0).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::UpstreamHttp { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_full_chain_in_order() {
        let mut seq = Sequence::new();
        let mut fetcher = MockJsonFetcher::new();

        fetcher
            .expect_fetch_json()
            .withf(|url| url == "/points/40.0066,-105.2633")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(json!({
                    "properties": {
                        "forecast": FORECAST,
                        "forecastHourly": HOURLY,
                        "relativeLocation": { "properties": { "city": "Boulder", "state": "CO" } }
                    }
                }))
            });
        fetcher
            .expect_fetch_json()
            .withf(|url| url == FORECAST)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(json!({ "properties": { "units": "us", "periods": [
                    { "name": "Today", "temperature": 70, "temperatureUnit": "F", "shortForecast": "Sunny" }
                ] } }))
            });
        fetcher
            .expect_fetch_json()
            .withf(|url| url == HOURLY)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(json!({ "properties": { "periods": [
                    { "name": "", "temperature": 65, "temperatureUnit": "F", "shortForecast": "Clear" },
                    { "name": "", "temperature": 63, "temperatureUnit": "F", "shortForecast": "Clear" }
                ] } }))
            });

        let snapshot = WeatherService::new(Arc::new(fetcher))
            .current_weather(boulder())
            .await
            .unwrap();

        assert_eq!(snapshot.location.city, "Boulder");
        assert_eq!(snapshot.current.unwrap()["temperature"], 65);
        assert_eq!(snapshot.forecast.len(), 1);
        assert_eq!(snapshot.forecast[0]["name"], "Today");
        assert_eq!(snapshot.units, "us");
    }

    #[tokio::test]
    async fn test_hourly_failure_aborts() {
        let mut fetcher = MockJsonFetcher::new();
        fetcher.expect_fetch_json().returning(|url| {
            if url.starts_with("/points") {
                Ok(json!({ "properties": { "forecast": FORECAST, "forecastHourly": HOURLY } }))
            } else if url == FORECAST {
                Ok(json!({ "properties": { "periods": [] } }))
            } else {
                Err(WeatherError::Transport {
                    url: url.to_string(),
                    reason: "connection reset".to_string(),
                })
            }
        });

        let err = WeatherService::new(Arc::new(fetcher))
            .current_weather(boulder())
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Transport { .. }));
    }
}
