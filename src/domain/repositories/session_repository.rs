//! Repository trait for login sessions.

use crate::domain::entities::{NewSession, Principal, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for login sessions.
///
/// Sessions are looked up by the HMAC of the raw token; raw tokens never reach
/// the database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError>;

    /// Resolves a token hash to its principal.
    ///
    /// Returns `Ok(None)` for unknown or expired sessions.
    async fn find_principal(&self, token_hash: &str) -> Result<Option<Principal>, AppError>;

    /// Deletes a session. Returns `false` if no row matched.
    async fn delete(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Deletes every expired session and returns how many were removed.
    async fn purge_expired(&self) -> Result<u64, AppError>;
}
