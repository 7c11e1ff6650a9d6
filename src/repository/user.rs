use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::user::UserRow;
use crate::domain::entity::UserEntity;
use crate::error::AppError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point lookup for login. Absent or tombstoned users surface as
    /// `WrongCredentials` so the response never reveals which field failed.
    async fn fetch_by_email(&self, email: &str) -> Result<UserEntity, AppError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn fetch_by_email(&self, email: &str) -> Result<UserEntity, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password FROM users WHERE email = $1 AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_email user: {}", e);
            AppError::from(e)
        })?;

        row.map(UserEntity::from).ok_or(AppError::WrongCredentials)
    }
}
