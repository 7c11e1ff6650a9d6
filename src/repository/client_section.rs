use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::client_section::ClientSectionRow;
use crate::domain::entity::ClientSectionEntity;
use crate::error::AppError;

#[async_trait]
pub trait ClientSectionRepository: Send + Sync {
    async fn create(&self, section: ClientSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ClientSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ClientSectionEntity, AppError>;
    async fn update(&self, section: ClientSectionEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgClientSectionRepository {
    pool: PgPool,
}

impl PgClientSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientSectionRepository for PgClientSectionRepository {
    async fn create(&self, section: ClientSectionEntity) -> Result<(), AppError> {
        sqlx::query("INSERT INTO client_sections (name, path_icon) VALUES ($1, $2)")
            .bind(&section.name)
            .bind(&section.path_icon)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] create client section: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ClientSectionEntity>, AppError> {
        let rows = sqlx::query_as::<_, ClientSectionRow>(
            "SELECT id, name, path_icon FROM client_sections \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all client sections: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(ClientSectionEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ClientSectionEntity, AppError> {
        let row = sqlx::query_as::<_, ClientSectionRow>(
            "SELECT id, name, path_icon FROM client_sections \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id client section: {}", e);
            AppError::from(e)
        })?;

        row.map(ClientSectionEntity::from)
            .ok_or(AppError::NotFound("client section"))
    }

    async fn update(&self, section: ClientSectionEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(section.id).await?;

        sqlx::query(
            "UPDATE client_sections SET name = $1, path_icon = $2, updated_at = now() \
             WHERE id = $3",
        )
        .bind(&section.name)
        .bind(&section.path_icon)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update client section: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE client_sections SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete client section: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
