use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::our_team::OurTeamRow;
use crate::domain::entity::OurTeamEntity;
use crate::error::AppError;

#[async_trait]
pub trait OurTeamRepository: Send + Sync {
    async fn create(&self, member: OurTeamEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<OurTeamEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<OurTeamEntity, AppError>;
    async fn update(&self, member: OurTeamEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgOurTeamRepository {
    pool: PgPool,
}

impl PgOurTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OurTeamRepository for PgOurTeamRepository {
    async fn create(&self, member: OurTeamEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO our_teams (name, role, tagline, path_photo) VALUES ($1, $2, $3, $4)",
        )
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.tagline)
        .bind(&member.path_photo)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create team member: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<OurTeamEntity>, AppError> {
        let rows = sqlx::query_as::<_, OurTeamRow>(
            "SELECT id, name, role, tagline, path_photo FROM our_teams \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all team members: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(OurTeamEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<OurTeamEntity, AppError> {
        let row = sqlx::query_as::<_, OurTeamRow>(
            "SELECT id, name, role, tagline, path_photo FROM our_teams \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id team member: {}", e);
            AppError::from(e)
        })?;

        row.map(OurTeamEntity::from)
            .ok_or(AppError::NotFound("team member"))
    }

    async fn update(&self, member: OurTeamEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(member.id).await?;

        sqlx::query(
            "UPDATE our_teams SET name = $1, role = $2, tagline = $3, path_photo = $4, \
             updated_at = now() WHERE id = $5",
        )
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.tagline)
        .bind(&member.path_photo)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update team member: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE our_teams SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete team member: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
