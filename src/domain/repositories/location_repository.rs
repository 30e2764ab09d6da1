//! Repository trait for the location catalogue and saved locations.

use crate::domain::entities::{Location, NewSavedLocation, SavedLocation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for locations.
///
/// The catalogue feeds autocomplete; saved locations are per-user and unique per
/// `(user_id, location_text)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Case-insensitive search: prefix matches first, then substring matches.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Location>, AppError>;

    /// Inserts a catalogue entry, or fills in missing coordinates of an existing one.
    async fn upsert_catalogue(
        &self,
        name: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), AppError>;

    /// Lists a user's saved locations, newest first.
    async fn list_saved(&self, user_id: i64) -> Result<Vec<SavedLocation>, AppError>;

    /// Saves a location for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already saved the same text.
    async fn save(&self, new_saved: NewSavedLocation) -> Result<SavedLocation, AppError>;

    /// Deletes a saved location owned by `user_id`. Returns `false` if no row matched.
    async fn delete_saved(&self, user_id: i64, id: i64) -> Result<bool, AppError>;
}
