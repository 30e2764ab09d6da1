//! Session authentication service.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewSession, Principal};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::verify_password;
use crate::utils::token::{generate_token, hash_token};

/// Result of a successful login. `token` is the raw value handed to the client once.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub principal: Principal,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for logging users in and resolving session tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage and
/// lookup, so a read-only database leak does not yield usable sessions.
pub struct AuthService<S: SessionRepository, U: UserRepository> {
    sessions: Arc<S>,
    users: Arc<U>,
    signing_secret: String,
    session_ttl: Duration,
}

impl<S: SessionRepository, U: UserRepository> AuthService<S, U> {
    pub fn new(
        sessions: Arc<S>,
        users: Arc<U>,
        signing_secret: String,
        session_ttl: Duration,
    ) -> Self {
        Self {
            sessions,
            users,
            signing_secret,
            session_ttl,
        }
    }

    /// Verifies credentials and opens a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is empty, and
    /// [`AppError::Unauthorized`] for an unknown user or wrong password. Both
    /// credential failures share one message.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::invalid_input(
                json!({ "reason": "username and password are required" }),
            ));
        }

        let user = self.users.find_by_username(username).await?;

        let user = match user {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                return Err(AppError::unauthorized(
                    "Invalid username or password",
                    serde_json::Value::Null,
                ));
            }
        };

        let token = generate_token();
        let expires_at = Utc::now() + self.session_ttl;

        self.sessions
            .create(NewSession {
                user_id: user.id,
                token_hash: hash_token(&self.signing_secret, &token),
                expires_at,
            })
            .await?;

        tracing::info!(user_id = user.id, "user logged in");

        Ok(LoginOutcome {
            principal: Principal {
                user_id: user.id,
                username: user.username,
            },
            token,
            expires_at,
        })
    }

    /// Resolves a raw session token to its principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is unknown or expired.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        self.sessions
            .find_principal(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Session is invalid or expired" }),
                )
            })
    }

    /// Ends a session. Returns `false` if the token did not match a session.
    pub async fn logout(&self, token: &str) -> Result<bool, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);
        self.sessions.delete(&token_hash).await
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }
}
