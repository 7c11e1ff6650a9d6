use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::profile::ProfileRow;
use crate::domain::entity::ProfileEntity;
use crate::error::AppError;

/// Profiles are seeded content pages; only point reads and full-record
/// replacement exist.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn fetch_by_id(&self, id: i64) -> Result<ProfileEntity, AppError>;
    async fn update(&self, profile: ProfileEntity) -> Result<(), AppError>;
}

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn fetch_by_id(&self, id: i64) -> Result<ProfileEntity, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, title, content FROM profiles WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id profile: {}", e);
            AppError::from(e)
        })?;

        row.map(ProfileEntity::from).ok_or(AppError::NotFound("profile"))
    }

    async fn update(&self, profile: ProfileEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(profile.id).await?;

        sqlx::query(
            "UPDATE profiles SET title = $1, content = $2, updated_at = now() WHERE id = $3",
        )
        .bind(&profile.title)
        .bind(&profile.content)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update profile: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }
}
