//! Location catalogue and saved-location entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A catalogue entry used for autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A location saved by a user. Unique per `(user_id, location_text)`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SavedLocation {
    pub id: i64,
    #[serde(skip)]
    pub user_id: i64,
    pub location_text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSavedLocation {
    pub user_id: i64,
    pub location_text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
