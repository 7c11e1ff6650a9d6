use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::hero_section::HeroSectionRow;
use crate::domain::entity::HeroSectionEntity;
use crate::error::AppError;

#[async_trait]
pub trait HeroSectionRepository: Send + Sync {
    async fn create(&self, section: HeroSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<HeroSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<HeroSectionEntity, AppError>;
    async fn update(&self, section: HeroSectionEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgHeroSectionRepository {
    pool: PgPool,
}

impl PgHeroSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroSectionRepository for PgHeroSectionRepository {
    async fn create(&self, section: HeroSectionEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO hero_sections (heading, sub_heading, path_video, banner) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&section.heading)
        .bind(&section.sub_heading)
        .bind(&section.path_video)
        .bind(&section.banner)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create hero section: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<HeroSectionEntity>, AppError> {
        let rows = sqlx::query_as::<_, HeroSectionRow>(
            "SELECT id, heading, sub_heading, path_video, banner FROM hero_sections \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all hero sections: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(HeroSectionEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<HeroSectionEntity, AppError> {
        let row = sqlx::query_as::<_, HeroSectionRow>(
            "SELECT id, heading, sub_heading, path_video, banner FROM hero_sections \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id hero section: {}", e);
            AppError::from(e)
        })?;

        row.map(HeroSectionEntity::from)
            .ok_or(AppError::NotFound("hero section"))
    }

    async fn update(&self, section: HeroSectionEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(section.id).await?;

        sqlx::query(
            "UPDATE hero_sections SET heading = $1, sub_heading = $2, path_video = $3, \
             banner = $4, updated_at = now() WHERE id = $5",
        )
        .bind(&section.heading)
        .bind(&section.sub_heading)
        .bind(&section.path_video)
        .bind(&section.banner)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update hero section: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE hero_sections SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete hero section: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
