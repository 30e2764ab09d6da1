//! DTOs for location autocomplete and saved locations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Location, SavedLocation};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<Location>,
}

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub items: Vec<SavedLocation>,
}

/// Body of `POST /api/locations/saved`.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveLocationRequest {
    #[validate(length(min = 1, max = 120, message = "Location must be 1-120 characters"))]
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
