//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// PostgreSQL repository for feed posts.
///
/// Reads join `users` to carry the author's username.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            WITH inserted AS (
                INSERT INTO posts (user_id, content, image_filename, location, latitude, longitude)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, user_id, content, image_filename, location, latitude, longitude, created_at
            )
            SELECT
                i.id,
                i.user_id,
                u.username AS author,
                i.content,
                i.image_filename,
                i.location,
                i.latitude,
                i.longitude,
                i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(new_post.user_id)
        .bind(&new_post.content)
        .bind(&new_post.image_filename)
        .bind(&new_post.location)
        .bind(new_post.latitude)
        .bind(new_post.longitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.user_id, u.username AS author, p.content, p.image_filename,
                   p.location, p.latitude, p.longitude, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.user_id, u.username AS author, p.content, p.image_filename,
                   p.location, p.latitude, p.longitude, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
