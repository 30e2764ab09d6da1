//! Registration page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::api::dto::auth::CredentialsRequest;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub username: String,
    pub error: Option<String>,
}

/// `GET /register`
pub async fn register_page_handler() -> impl IntoResponse {
    RegisterTemplate {
        username: String::new(),
        error: None,
    }
}

/// `POST /register` (form)
///
/// Redirects to `/login?registered=1` on success.
pub async fn register_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<CredentialsRequest>,
) -> Response {
    match state
        .user_service
        .register(form.username(), form.password())
        .await
    {
        Ok(_) => Redirect::to("/login?registered=1").into_response(),
        Err(e) => {
            let status = e.status();
            let message = match status {
                StatusCode::BAD_REQUEST => {
                    "Usernames are 3-32 letters, digits, '.', '_' or '-'; passwords 8-128 characters."
                        .to_string()
                }
                StatusCode::CONFLICT => e.to_string(),
                _ => {
                    tracing::error!(error = ?e, "registration failed");
                    "Something went wrong. Try again.".to_string()
                }
            };

            (
                status,
                RegisterTemplate {
                    username: form.username().to_string(),
                    error: Some(message),
                },
            )
                .into_response()
        }
    }
}
