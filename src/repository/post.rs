use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::post::PostRow;
use crate::domain::entity::PostEntity;
use crate::error::AppError;

/// Sentinel for "no exclusion" when checking slug uniqueness on create.
pub const NO_EXCLUDED_ID: i64 = 0;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: PostEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PostEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PostEntity, AppError>;
    async fn fetch_by_slug(&self, slug: &str) -> Result<PostEntity, AppError>;
    async fn update(&self, post: PostEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
    /// True iff no live post other than `exclude_id` carries `slug`.
    async fn is_slug_unique(&self, slug: &str, exclude_id: i64) -> Result<bool, AppError>;
}

pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: PostEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO posts (title, slug, author, featured_image, content, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.author)
        .bind(&post.featured_image)
        .bind(&post.content)
        .bind(post.published_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create post: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<PostEntity>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author, featured_image, content, published_at \
             FROM posts WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all posts: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(PostEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PostEntity, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author, featured_image, content, published_at \
             FROM posts WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id post: {}", e);
            AppError::from(e)
        })?;

        row.map(PostEntity::from).ok_or(AppError::NotFound("post"))
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<PostEntity, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author, featured_image, content, published_at \
             FROM posts WHERE slug = $1 AND deleted_at IS NULL",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_slug post: {}", e);
            AppError::from(e)
        })?;

        row.map(PostEntity::from).ok_or(AppError::NotFound("post"))
    }

    async fn update(&self, post: PostEntity) -> Result<(), AppError> {
        // Load-then-write: fail with NotFound before touching anything,
        // then overwrite the mutable fields (last-writer-wins).
        let current = self.fetch_by_id(post.id).await?;

        sqlx::query(
            "UPDATE posts SET title = $1, slug = $2, author = $3, featured_image = $4, \
             content = $5, published_at = $6, updated_at = now() WHERE id = $7",
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.author)
        .bind(&post.featured_image)
        .bind(&post.content)
        .bind(post.published_at)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update post: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        // Already-tombstoned ids fail on this load.
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE posts SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete post: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn is_slug_unique(&self, slug: &str, exclude_id: i64) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts WHERE slug = $1 AND id != $2 AND deleted_at IS NULL",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] is_slug_unique: {}", e);
            AppError::from(e)
        })?;

        Ok(count == 0)
    }
}
