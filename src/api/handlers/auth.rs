//! Handlers for registration, login, logout, and the current principal.

use axum::{
    Json,
    extract::{Request, State, rejection::JsonRejection},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::api::dto::auth::{CredentialsRequest, LoginResponse, UserResponse};
use crate::api::middleware::auth::session_token;
use crate::domain::entities::Principal;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::{clear_session_cookie, session_cookie};

/// Creates an account.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Errors
///
/// Returns 400 `Invalid input` if the body is not a credentials object, or the
/// username or password is missing, empty, or malformed. Nothing is written in
/// that case.
/// Returns 409 if the username is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(payload) = payload?;
    let user = state
        .user_service
        .register(payload.username(), payload.password())
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Opens a session and sets the session cookie.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// The raw token is also returned in the body for clients that send it as
/// `Authorization: Bearer <token>`.
///
/// # Errors
///
/// Returns 400 if a field is empty, 401 for wrong credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let outcome = state
        .auth_service
        .login(payload.username(), payload.password())
        .await?;

    let cookie = session_cookie(&outcome.token, state.cookie);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            user: outcome.principal,
            token: outcome.token,
            expires_at: outcome.expires_at,
        }),
    )
        .into_response())
}

/// Ends the current session (if any) and clears the cookie.
///
/// # Endpoint
///
/// `POST /api/logout`
///
/// Always answers 204, so logging out twice is harmless.
pub async fn logout_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let (mut parts, _body) = req.into_parts();

    if let Some(token) = session_token(&mut parts).await
        && state.auth_service.logout(&token).await?
    {
        tracing::info!("session closed");
    }

    Ok((
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie(state.cookie))],
    )
        .into_response())
}

/// Returns the session principal.
///
/// # Endpoint
///
/// `GET /api/me`
pub async fn me_handler(principal: Principal) -> Json<Principal> {
    Json(principal)
}
