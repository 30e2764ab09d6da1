//! Account registration service.

use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]{3,32}$").expect("valid username regex"));

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 128;

pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Registers a new account.
    ///
    /// Input is validated before any repository call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] ("Invalid input") if the username is empty or
    /// malformed or the password length is out of range, and [`AppError::Conflict`]
    /// if the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();
        validate_credentials(username, password)?;

        let password_hash = hash_password(password)?;

        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Username is already taken",
                    json!({ "username": username }),
                ),
                other => other,
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "user registered");

        Ok(user)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Checks username shape and password length.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::invalid_input(
            json!({ "reason": "username and password are required" }),
        ));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::invalid_input(json!({
            "field": "username",
            "reason": "3-32 characters: letters, digits, '_', '.', '-'"
        })));
    }

    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(AppError::invalid_input(json!({
            "field": "password",
            "reason": format!("must be {PASSWORD_MIN_LEN}-{PASSWORD_MAX_LEN} characters")
        })));
    }

    Ok(())
}
