use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::statistic::StatisticRow;
use crate::domain::entity::StatisticEntity;
use crate::error::AppError;

#[async_trait]
pub trait StatisticRepository: Send + Sync {
    async fn create(&self, statistic: StatisticEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<StatisticEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<StatisticEntity, AppError>;
    async fn update(&self, statistic: StatisticEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgStatisticRepository {
    pool: PgPool,
}

impl PgStatisticRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticRepository for PgStatisticRepository {
    async fn create(&self, statistic: StatisticEntity) -> Result<(), AppError> {
        sqlx::query("INSERT INTO statistics (name, total, icon) VALUES ($1, $2, $3)")
            .bind(&statistic.name)
            .bind(statistic.total)
            .bind(&statistic.icon)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] create statistic: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<StatisticEntity>, AppError> {
        let rows = sqlx::query_as::<_, StatisticRow>(
            "SELECT id, name, total, icon FROM statistics \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all statistics: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(StatisticEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<StatisticEntity, AppError> {
        let row = sqlx::query_as::<_, StatisticRow>(
            "SELECT id, name, total, icon FROM statistics WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id statistic: {}", e);
            AppError::from(e)
        })?;

        row.map(StatisticEntity::from).ok_or(AppError::NotFound("statistic"))
    }

    async fn update(&self, statistic: StatisticEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(statistic.id).await?;

        sqlx::query(
            "UPDATE statistics SET name = $1, total = $2, icon = $3, updated_at = now() \
             WHERE id = $4",
        )
        .bind(&statistic.name)
        .bind(statistic.total)
        .bind(&statistic.icon)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update statistic: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE statistics SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete statistic: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
