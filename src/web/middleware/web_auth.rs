//! Session guard for browser pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::auth::session_token;
use crate::state::AppState;

/// Resolves the session principal for page routes.
///
/// Same credentials as [`crate::api::middleware::auth::layer`], but a missing or
/// invalid session redirects to `/login` (303) instead of answering 401.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let (mut parts, body) = req.into_parts();

    let Some(token) = session_token(&mut parts).await else {
        return Err(Redirect::to("/login"));
    };

    match st.auth_service.authenticate(&token).await {
        Ok(principal) => {
            parts.extensions.insert(principal);
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
        Err(e) if e.status().is_server_error() => {
            tracing::error!(error = ?e, "session lookup failed");
            Err(Redirect::to("/login"))
        }
        Err(e) => {
            tracing::debug!(error = %e, "page session rejected");
            Err(Redirect::to("/login"))
        }
    }
}
