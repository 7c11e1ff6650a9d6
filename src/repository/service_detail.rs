use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::service_detail::ServiceDetailRow;
use crate::domain::entity::ServiceDetailEntity;
use crate::error::AppError;

#[async_trait]
pub trait ServiceDetailRepository: Send + Sync {
    async fn create(&self, detail: ServiceDetailEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ServiceDetailEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ServiceDetailEntity, AppError>;
    /// The detail page belonging to one service section.
    async fn fetch_by_service_id(&self, service_id: i64) -> Result<ServiceDetailEntity, AppError>;
    async fn update(&self, detail: ServiceDetailEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgServiceDetailRepository {
    pool: PgPool,
}

impl PgServiceDetailRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceDetailRepository for PgServiceDetailRepository {
    async fn create(&self, detail: ServiceDetailEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO service_details (service_id, path_image, title, description) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(detail.service_id)
        .bind(&detail.path_image)
        .bind(&detail.title)
        .bind(&detail.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create service detail: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ServiceDetailEntity>, AppError> {
        let rows = sqlx::query_as::<_, ServiceDetailRow>(
            "SELECT id, service_id, path_image, title, description FROM service_details \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all service details: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(ServiceDetailEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ServiceDetailEntity, AppError> {
        let row = sqlx::query_as::<_, ServiceDetailRow>(
            "SELECT id, service_id, path_image, title, description FROM service_details \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id service detail: {}", e);
            AppError::from(e)
        })?;

        row.map(ServiceDetailEntity::from)
            .ok_or(AppError::NotFound("service detail"))
    }

    async fn fetch_by_service_id(&self, service_id: i64) -> Result<ServiceDetailEntity, AppError> {
        let row = sqlx::query_as::<_, ServiceDetailRow>(
            "SELECT id, service_id, path_image, title, description FROM service_details \
             WHERE service_id = $1 AND deleted_at IS NULL",
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_service_id service detail: {}", e);
            AppError::from(e)
        })?;

        row.map(ServiceDetailEntity::from)
            .ok_or(AppError::NotFound("service detail"))
    }

    async fn update(&self, detail: ServiceDetailEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(detail.id).await?;

        sqlx::query(
            "UPDATE service_details SET service_id = $1, path_image = $2, title = $3, \
             description = $4, updated_at = now() WHERE id = $5",
        )
        .bind(detail.service_id)
        .bind(&detail.path_image)
        .bind(&detail.title)
        .bind(&detail.description)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update service detail: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE service_details SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete service detail: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
