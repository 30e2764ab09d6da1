//! Feed post service: listing, creation with image upload, owner-scoped deletion.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, Principal};
use crate::domain::repositories::{ImageStore, LocationRepository, PostRepository};
use crate::domain::weather::Coordinate;
use crate::error::AppError;

const CONTENT_MAX_CHARS: usize = 2000;
const LOCATION_MAX_CHARS: usize = 120;
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// An uploaded image as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Unvalidated input for a new post.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub image: Option<ImageUpload>,
    pub location: Option<String>,
    pub coordinate: Option<Coordinate>,
}

pub struct PostService<P: PostRepository, L: LocationRepository, I: ImageStore> {
    posts: Arc<P>,
    locations: Arc<L>,
    images: Arc<I>,
}

impl<P: PostRepository, L: LocationRepository, I: ImageStore> PostService<P, L, I> {
    pub fn new(posts: Arc<P>, locations: Arc<L>, images: Arc<I>) -> Self {
        Self {
            posts,
            locations,
            images,
        }
    }

    /// Returns one page of the feed (newest first) and the total post count.
    pub async fn feed(&self, offset: i64, limit: i64) -> Result<(Vec<Post>, i64), AppError> {
        let posts = self.posts.list(offset, limit).await?;
        let total = self.posts.count().await?;
        Ok((posts, total))
    }

    /// Creates a post for `principal`.
    ///
    /// The image (if any) is written first; if the row insert then fails the file is
    /// removed again, best-effort. A labelled post with coordinates also feeds the
    /// location catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty/oversized content, an oversized
    /// location label, or an empty/unsupported image.
    pub async fn create(&self, principal: &Principal, draft: PostDraft) -> Result<Post, AppError> {
        let content = draft.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::bad_request(
                "Post content is required",
                json!({ "field": "content" }),
            ));
        }
        if content.chars().count() > CONTENT_MAX_CHARS {
            return Err(AppError::bad_request(
                format!("Post content must be at most {CONTENT_MAX_CHARS} characters"),
                json!({ "field": "content" }),
            ));
        }

        let location = normalize_label(draft.location)?;

        let image = match draft.image {
            Some(upload) => Some(validate_image(upload)?),
            None => None,
        };

        let image_filename = match image {
            Some((extension, bytes)) => {
                let name = self.images.save(&extension, bytes).await.map_err(|e| {
                    AppError::internal("Failed to store image", json!({ "reason": e.to_string() }))
                })?;
                Some(name)
            }
            None => None,
        };

        let new_post = NewPost {
            user_id: principal.user_id,
            content,
            image_filename: image_filename.clone(),
            location: location.clone(),
            latitude: draft.coordinate.map(|c| c.latitude()),
            longitude: draft.coordinate.map(|c| c.longitude()),
        };

        let post = match self.posts.create(new_post).await {
            Ok(post) => post,
            Err(e) => {
                if let Some(name) = &image_filename {
                    self.remove_image_best_effort(name).await;
                }
                return Err(e);
            }
        };

        if let (Some(label), Some(coordinate)) = (&location, draft.coordinate)
            && let Err(e) = self
                .locations
                .upsert_catalogue(
                    label,
                    Some(coordinate.latitude()),
                    Some(coordinate.longitude()),
                )
                .await
        {
            tracing::warn!(error = %e, location = %label, "Failed to add post location to catalogue");
        }

        tracing::info!(post_id = post.id, user_id = principal.user_id, "post created");

        Ok(post)
    }

    /// Deletes a post owned by `principal`, then its image best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist and
    /// [`AppError::Forbidden`] if it belongs to someone else. Image removal failures
    /// are logged, never returned.
    pub async fn delete(&self, principal: &Principal, id: i64) -> Result<(), AppError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))?;

        if !post.is_owned_by(principal.user_id) {
            return Err(AppError::forbidden(
                "You can only delete your own posts",
                json!({ "id": id }),
            ));
        }

        if !self.posts.delete(id).await? {
            return Err(AppError::not_found("Post not found", json!({ "id": id })));
        }

        if let Some(name) = &post.image_filename {
            self.remove_image_best_effort(name).await;
        }

        tracing::info!(post_id = id, user_id = principal.user_id, "post deleted");

        Ok(())
    }

    async fn remove_image_best_effort(&self, name: &str) {
        if let Err(e) = self.images.remove(name).await {
            tracing::warn!(error = %e, file = %name, "Failed to remove image file");
        }
    }
}

/// Trims a location label; empty becomes `None`.
pub fn normalize_label(label: Option<String>) -> Result<Option<String>, AppError> {
    let Some(label) = label else {
        return Ok(None);
    };
    let label = label.trim();
    if label.is_empty() {
        return Ok(None);
    }
    if label.chars().count() > LOCATION_MAX_CHARS {
        return Err(AppError::bad_request(
            format!("Location must be at most {LOCATION_MAX_CHARS} characters"),
            json!({ "field": "location" }),
        ));
    }
    Ok(Some(label.to_string()))
}

/// Returns the lowercased extension of an allowed image file name.
pub fn image_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

fn validate_image(upload: ImageUpload) -> Result<(String, Vec<u8>), AppError> {
    let extension = image_extension(&upload.file_name).ok_or_else(|| {
        AppError::bad_request(
            "Unsupported image type",
            json!({ "file_name": upload.file_name, "allowed": IMAGE_EXTENSIONS }),
        )
    })?;

    if upload.bytes.is_empty() {
        return Err(AppError::bad_request(
            "Image file is empty",
            json!({ "file_name": upload.file_name }),
        ));
    }

    Ok((extension, upload.bytes))
}
