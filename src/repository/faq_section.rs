use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::faq_section::FaqSectionRow;
use crate::domain::entity::FaqSectionEntity;
use crate::error::AppError;

#[async_trait]
pub trait FaqSectionRepository: Send + Sync {
    async fn create(&self, faq: FaqSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<FaqSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<FaqSectionEntity, AppError>;
    async fn update(&self, faq: FaqSectionEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgFaqSectionRepository {
    pool: PgPool,
}

impl PgFaqSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqSectionRepository for PgFaqSectionRepository {
    async fn create(&self, faq: FaqSectionEntity) -> Result<(), AppError> {
        sqlx::query("INSERT INTO faq_sections (title, description) VALUES ($1, $2)")
            .bind(&faq.title)
            .bind(&faq.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] create faq: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<FaqSectionEntity>, AppError> {
        let rows = sqlx::query_as::<_, FaqSectionRow>(
            "SELECT id, title, description FROM faq_sections \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all faqs: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(FaqSectionEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<FaqSectionEntity, AppError> {
        let row = sqlx::query_as::<_, FaqSectionRow>(
            "SELECT id, title, description FROM faq_sections \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id faq: {}", e);
            AppError::from(e)
        })?;

        row.map(FaqSectionEntity::from)
            .ok_or(AppError::NotFound("faq section"))
    }

    async fn update(&self, faq: FaqSectionEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(faq.id).await?;

        sqlx::query(
            "UPDATE faq_sections SET title = $1, description = $2, updated_at = now() \
             WHERE id = $3",
        )
        .bind(&faq.title)
        .bind(&faq.description)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update faq: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE faq_sections SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete faq: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
