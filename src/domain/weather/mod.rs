//! Weather value types and the outbound fetch port.
//!
//! - [`Coordinate`] - validated latitude/longitude from untrusted input
//! - [`GridPoint`] - resolved forecast/hourly URLs for a coordinate
//! - [`WeatherSnapshot`] - assembled per-request result
//! - [`JsonFetcher`] - the fetch primitive the pipeline talks to
//! - [`WeatherError`] - failure taxonomy shared by the primitive and the pipeline

pub mod coordinate;
pub mod error;
pub mod fetcher;
pub mod snapshot;

pub use coordinate::{Coordinate, CoordinateError};
pub use error::WeatherError;
pub use fetcher::JsonFetcher;
pub use snapshot::{GridPoint, PlaceLabel, WeatherSnapshot};

#[cfg(test)]
pub use fetcher::MockJsonFetcher;
