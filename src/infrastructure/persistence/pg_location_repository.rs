//! PostgreSQL implementation of location repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Location, NewSavedLocation, SavedLocation};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

/// PostgreSQL repository for the location catalogue and saved locations.
pub struct PgLocationRepository {
    pool: Arc<PgPool>,
}

impl PgLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Escapes `LIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<Location>, AppError> {
        let pattern = escape_like(&query.to_lowercase());

        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, latitude, longitude
            FROM locations
            WHERE LOWER(name) LIKE '%' || $1 || '%'
            ORDER BY (LOWER(name) LIKE $1 || '%') DESC, LENGTH(name) ASC, name ASC
            LIMIT $2
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(locations)
    }

    async fn upsert_catalogue(
        &self,
        name: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO locations (name, latitude, longitude)
            VALUES ($1, $2, $3)
            ON CONFLICT ((LOWER(name))) DO UPDATE
            SET latitude = COALESCE(locations.latitude, EXCLUDED.latitude),
                longitude = COALESCE(locations.longitude, EXCLUDED.longitude)
            "#,
        )
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_saved(&self, user_id: i64) -> Result<Vec<SavedLocation>, AppError> {
        let saved = sqlx::query_as::<_, SavedLocation>(
            r#"
            SELECT id, user_id, location_text, latitude, longitude, created_at
            FROM saved_locations
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn save(&self, new_saved: NewSavedLocation) -> Result<SavedLocation, AppError> {
        let saved = sqlx::query_as::<_, SavedLocation>(
            r#"
            INSERT INTO saved_locations (user_id, location_text, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, location_text, latitude, longitude, created_at
            "#,
        )
        .bind(new_saved.user_id)
        .bind(&new_saved.location_text)
        .bind(new_saved.latitude)
        .bind(new_saved.longitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn delete_saved(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM saved_locations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
