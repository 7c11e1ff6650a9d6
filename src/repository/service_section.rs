use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::service_section::ServiceSectionRow;
use crate::domain::entity::ServiceSectionEntity;
use crate::error::AppError;

#[async_trait]
pub trait ServiceSectionRepository: Send + Sync {
    async fn create(&self, section: ServiceSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ServiceSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ServiceSectionEntity, AppError>;
    async fn update(&self, section: ServiceSectionEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgServiceSectionRepository {
    pool: PgPool,
}

impl PgServiceSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceSectionRepository for PgServiceSectionRepository {
    async fn create(&self, section: ServiceSectionEntity) -> Result<(), AppError> {
        sqlx::query("INSERT INTO service_sections (name, tagline, path_icon) VALUES ($1, $2, $3)")
            .bind(&section.name)
            .bind(&section.tagline)
            .bind(&section.path_icon)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] create service section: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ServiceSectionEntity>, AppError> {
        let rows = sqlx::query_as::<_, ServiceSectionRow>(
            "SELECT id, name, tagline, path_icon FROM service_sections \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all service sections: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(ServiceSectionEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ServiceSectionEntity, AppError> {
        let row = sqlx::query_as::<_, ServiceSectionRow>(
            "SELECT id, name, tagline, path_icon FROM service_sections \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id service section: {}", e);
            AppError::from(e)
        })?;

        row.map(ServiceSectionEntity::from)
            .ok_or(AppError::NotFound("service section"))
    }

    async fn update(&self, section: ServiceSectionEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(section.id).await?;

        sqlx::query(
            "UPDATE service_sections SET name = $1, tagline = $2, path_icon = $3, \
             updated_at = now() WHERE id = $4",
        )
        .bind(&section.name)
        .bind(&section.tagline)
        .bind(&section.path_icon)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update service section: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE service_sections SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete service section: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
