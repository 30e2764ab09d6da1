//! Handlers for the post feed.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::post::{PostItem, PostListResponse};
use crate::application::services::{ImageUpload, PostDraft};
use crate::domain::entities::Principal;
use crate::domain::weather::Coordinate;
use crate::error::AppError;
use crate::state::AppState;

/// Lists posts, newest first.
///
/// # Endpoint
///
/// `GET /api/posts?page=1&page_size=20`
///
/// # Errors
///
/// Returns 400 for `page = 0` or `page_size` outside 1..=100.
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PostListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request(msg, json!({ "fields": ["page", "page_size"] })))?;

    let (posts, total) = state.post_service.feed(offset, limit).await?;

    Ok(Json(PostListResponse {
        items: posts.into_iter().map(PostItem::from).collect(),
        page: params.page(),
        page_size: params.page_size(),
        total,
    }))
}

/// Creates a post from a multipart form.
///
/// # Endpoint
///
/// `POST /api/posts` (`multipart/form-data`)
///
/// # Fields
///
/// - `content` - required text
/// - `image` - optional file (png, jpg, jpeg, gif, webp)
/// - `location` - optional label
/// - `latitude`, `longitude` - optional, both or neither
///
/// # Errors
///
/// Returns 400 for invalid fields, 413 when the body exceeds the upload cap.
pub async fn create_post_handler(
    State(state): State<AppState>,
    principal: Principal,
    multipart: Multipart,
) -> Result<(StatusCode, Json<PostItem>), AppError> {
    let draft = read_draft(multipart).await?;
    let post = state.post_service.create(&principal, draft).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Deletes one of the principal's posts.
///
/// # Endpoint
///
/// `DELETE /api/posts/{id}`
///
/// # Errors
///
/// Returns 404 if the post does not exist, 403 if it belongs to another user.
pub async fn delete_post_handler(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete(&principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn read_draft(mut multipart: Multipart) -> Result<PostDraft, AppError> {
    let mut draft = PostDraft::default();
    let mut latitude = None;
    let mut longitude = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "content" => draft.content = field.text().await?,
            "location" => draft.location = Some(field.text().await?),
            "latitude" => latitude = Some(field.text().await?),
            "longitude" => longitude = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers submit an empty, unnamed part when no file was chosen.
                if !(file_name.is_empty() && bytes.is_empty()) {
                    draft.image = Some(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => tracing::debug!(field = other, "ignoring unknown multipart field"),
        }
    }

    draft.coordinate = Coordinate::parse_optional(latitude.as_deref(), longitude.as_deref())?;

    Ok(draft)
}
