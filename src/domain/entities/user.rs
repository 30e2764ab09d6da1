//! User account entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account. `password_hash` is an Argon2id PHC string.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
