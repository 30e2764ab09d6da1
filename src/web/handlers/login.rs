//! Login and logout pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, Request, State},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::api::dto::auth::CredentialsRequest;
use crate::api::middleware::auth::session_token;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::{clear_session_cookie, session_cookie};

/// Renders `templates/login.html`: credentials form plus an optional error or
/// post-registration notice.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub username: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub registered: Option<String>,
}

/// `GET /login`
pub async fn login_page_handler(Query(query): Query<LoginPageQuery>) -> impl IntoResponse {
    LoginTemplate {
        username: String::new(),
        error: None,
        notice: query
            .registered
            .map(|_| "Account created. You can sign in now.".to_string()),
    }
}

/// `POST /login` (form)
///
/// On success sets the session cookie and redirects to the feed; otherwise
/// re-renders the form with the error and the matching status.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<CredentialsRequest>,
) -> Response {
    match state
        .auth_service
        .login(form.username(), form.password())
        .await
    {
        Ok(outcome) => (
            [(SET_COOKIE, session_cookie(&outcome.token, state.cookie))],
            Redirect::to("/"),
        )
            .into_response(),
        Err(e) => rerender(&form, e),
    }
}

fn rerender(form: &CredentialsRequest, err: AppError) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(error = ?err, "login failed");
    }

    let message = match status {
        StatusCode::BAD_REQUEST => "Enter a username and password.".to_string(),
        StatusCode::UNAUTHORIZED => err.to_string(),
        _ => "Something went wrong. Try again.".to_string(),
    };

    (
        status,
        LoginTemplate {
            username: form.username().to_string(),
            error: Some(message),
            notice: None,
        },
    )
        .into_response()
}

/// `POST /logout` (form)
///
/// Deletes the session if one is presented, clears the cookie, and returns to the
/// login page.
pub async fn logout_submit_handler(State(state): State<AppState>, req: Request) -> Response {
    let (mut parts, _body) = req.into_parts();

    if let Some(token) = session_token(&mut parts).await
        && let Err(e) = state.auth_service.logout(&token).await
    {
        tracing::warn!(error = %e, "Failed to delete session on logout");
    }

    (
        [(SET_COOKIE, clear_session_cookie(state.cookie))],
        Redirect::to("/login"),
    )
        .into_response()
}
