//! Session entity and the request-scoped principal.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A login session. Only the HMAC of the raw token is stored.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// The authenticated identity attached to a request by the session guard.
///
/// Handlers receive it as an extractor; it is never read from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_expiry() {
        let mut session = Session {
            id: 1,
            user_id: 7,
            token_hash: "abc".to_string(),
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!session.is_expired());

        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired());
    }
}
