//! DTOs for feed posts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Post;

/// URL prefix under which stored images are served.
pub const UPLOADS_PREFIX: &str = "/uploads";

#[derive(Debug, Serialize)]
pub struct PostItem {
    pub id: i64,
    pub user_id: i64,
    pub author: String,
    pub content: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostItem {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            author: post.author,
            content: post.content,
            image_url: post
                .image_filename
                .map(|name| format!("{UPLOADS_PREFIX}/{name}")),
            location: post.location,
            latitude: post.latitude,
            longitude: post.longitude,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub items: Vec<PostItem>,
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_is_prefixed() {
        let post = Post {
            id: 1,
            user_id: 2,
            author: "dana".to_string(),
            content: "Clear skies".to_string(),
            image_filename: Some("abc.png".to_string()),
            location: Some("Boulder, CO".to_string()),
            latitude: Some(40.0),
            longitude: Some(-105.2),
            created_at: Utc::now(),
        };

        let item = PostItem::from(post);
        assert_eq!(item.image_url.as_deref(), Some("/uploads/abc.png"));
        assert_eq!(item.author, "dana");
    }
}
