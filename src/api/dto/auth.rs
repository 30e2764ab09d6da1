//! DTOs for registration, login, and session introspection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Principal, User};

/// Username/password body shared by `POST /api/register` and `POST /api/login`.
///
/// Both fields are optional at the serde level so that `null` or a missing key
/// reaches the service and is rejected as `Invalid input` rather than as a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: Principal,
    /// Raw session token; also set as the session cookie.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_read_as_empty() {
        let req: CredentialsRequest =
            serde_json::from_str(r#"{"username": null}"#).unwrap();
        assert_eq!(req.username(), "");
        assert_eq!(req.password(), "");
    }

    #[test]
    fn test_fields_pass_through() {
        let req: CredentialsRequest =
            serde_json::from_str(r#"{"username": "testuser", "password": "testpassword123"}"#)
                .unwrap();
        assert_eq!(req.username(), "testuser");
        assert_eq!(req.password(), "testpassword123");
    }
}
