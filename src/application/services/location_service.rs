//! Location autocomplete and per-user saved locations.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::post_service::normalize_label;
use crate::domain::entities::{Location, NewSavedLocation, Principal, SavedLocation};
use crate::domain::repositories::LocationRepository;
use crate::domain::weather::Coordinate;
use crate::error::AppError;

/// Maximum number of autocomplete suggestions returned.
pub const SEARCH_LIMIT: i64 = 10;
const QUERY_MAX_CHARS: usize = 100;

pub struct LocationService<L: LocationRepository> {
    repository: Arc<L>,
}

impl<L: LocationRepository> LocationService<L> {
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Autocompletes a location query against the catalogue.
    ///
    /// An empty (or missing) query yields no suggestions without touching the database.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Location>, AppError> {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        if query.chars().count() > QUERY_MAX_CHARS {
            return Err(AppError::bad_request(
                format!("Query must be at most {QUERY_MAX_CHARS} characters"),
                json!({ "field": "q" }),
            ));
        }

        self.repository.search(query, SEARCH_LIMIT).await
    }

    pub async fn list_saved(&self, principal: &Principal) -> Result<Vec<SavedLocation>, AppError> {
        self.repository.list_saved(principal.user_id).await
    }

    /// Saves a location for the principal and adds it to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or oversized label and
    /// [`AppError::Conflict`] if the principal already saved the same text.
    pub async fn save(
        &self,
        principal: &Principal,
        location_text: String,
        coordinate: Option<Coordinate>,
    ) -> Result<SavedLocation, AppError> {
        let location_text = normalize_label(Some(location_text))?.ok_or_else(|| {
            AppError::bad_request("Location is required", json!({ "field": "location" }))
        })?;

        let latitude = coordinate.map(|c| c.latitude());
        let longitude = coordinate.map(|c| c.longitude());

        let saved = self
            .repository
            .save(NewSavedLocation {
                user_id: principal.user_id,
                location_text: location_text.clone(),
                latitude,
                longitude,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Location already saved",
                    json!({ "location": location_text }),
                ),
                other => other,
            })?;

        if let Err(e) = self
            .repository
            .upsert_catalogue(&saved.location_text, latitude, longitude)
            .await
        {
            tracing::warn!(error = %e, "Failed to add saved location to catalogue");
        }

        Ok(saved)
    }

    /// Removes one of the principal's saved locations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no saved location with `id` belongs to the principal.
    pub async fn remove(&self, principal: &Principal, id: i64) -> Result<(), AppError> {
        if self.repository.delete_saved(principal.user_id, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Saved location not found",
                json!({ "id": id }),
            ))
        }
    }
}
