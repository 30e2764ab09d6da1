//! Session guard for API routes and the [`Principal`] extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::entities::Principal;
use crate::utils::cookie::{SESSION_COOKIE, read_cookie};
use crate::{error::AppError, state::AppState};

/// Extracts the raw session token from a request.
///
/// `Authorization: Bearer <token>` wins over the `skyfeed_session` cookie when both
/// are present.
pub async fn session_token(parts: &mut Parts) -> Option<String> {
    if let Ok(AuthBearer(token)) = AuthBearer::from_request_parts(parts, &()).await
        && !token.is_empty()
    {
        return Some(token);
    }

    read_cookie(&parts.headers, SESSION_COOKIE)
}

/// Resolves the session principal and stores it in request extensions.
///
/// # Accepted credentials
///
/// ```text
/// Cookie: skyfeed_session=<token>
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is present or the session is unknown or
/// expired.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/weather", get(weather_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = session_token(&mut parts).await.ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Session cookie or Bearer token is missing" }),
        )
    })?;

    let principal = st.auth_service.authenticate(&token).await?;
    tracing::debug!(user_id = principal.user_id, "session resolved");

    parts.extensions.insert(principal);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Handlers behind a session guard take the principal as an argument.
///
/// Rejects with 401 when the guard did not run or found no session.
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Principal>().cloned().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "No authenticated session" }),
            )
        })
    }
}
