//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /welcome`     - Public greeting
//! - `GET  /health`      - Health check: database, upload directory (public)
//! - `/api/*`            - JSON API; account/session routes public, the rest
//!   session-gated (401 without a session)
//! - `/`, `/login`, `/register`, `/logout` - Pages; the feed redirects to `/login`
//!   without a session
//! - `/static/*`         - Static assets
//! - `/uploads/*`        - Stored post images
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Session cookie or Bearer token (API), cookie (pages)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, welcome_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `state` is injected into all handlers; the upload directory served under
/// `/uploads` is taken from `state.uploads`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes(state.max_upload_bytes)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(api_protected);

    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );

    let web_router = Router::new()
        .merge(web_protected)
        .merge(web::routes::public_routes());

    let uploads_dir = state.uploads.root().to_path_buf();

    let router = Router::new()
        .route("/welcome", get(welcome_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new("static"))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
