//! Feed page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::post::PostItem;
use crate::domain::entities::{Principal, SavedLocation};
use crate::state::AppState;

/// One rendered post.
pub struct FeedEntry {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub created_at: String,
    pub own: bool,
}

/// Renders `templates/feed.html`: the post form, one page of posts, saved
/// locations with a weather button each, and pager links.
#[derive(Template, WebTemplate)]
#[template(path = "feed.html")]
pub struct FeedTemplate {
    pub username: String,
    pub posts: Vec<FeedEntry>,
    pub saved: Vec<SavedLocation>,
    pub page: u32,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
    pub error: Option<String>,
}

/// `GET /?page=N` (session required)
///
/// Data failures render the page with an error banner rather than an error page.
pub async fn feed_handler(
    State(state): State<AppState>,
    principal: Principal,
    Query(params): Query<PaginationParams>,
) -> Response {
    let page = params.page().max(1);
    let page_size = i64::from(params.page_size().clamp(1, 100));
    let offset = (i64::from(page) - 1) * page_size;

    let mut error = None;

    let (posts, total) = match state.post_service.feed(offset, page_size).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to load feed");
            error = Some("The feed could not be loaded.".to_string());
            (Vec::new(), 0)
        }
    };

    let saved = match state.location_service.list_saved(&principal).await {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to load saved locations");
            Vec::new()
        }
    };

    let posts = posts
        .into_iter()
        .map(PostItem::from)
        .map(|p| FeedEntry {
            own: p.user_id == principal.user_id,
            id: p.id,
            author: p.author,
            content: p.content,
            image_url: p.image_url,
            location: p.location,
            created_at: p.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        })
        .collect();

    FeedTemplate {
        username: principal.username,
        posts,
        saved,
        page,
        prev_page: (page > 1).then(|| page - 1),
        next_page: (offset + page_size < total).then(|| page + 1),
        error,
    }
    .into_response()
}
