use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::contact_us::ContactUsRow;
use crate::domain::entity::ContactUsEntity;
use crate::error::AppError;

#[async_trait]
pub trait ContactUsRepository: Send + Sync {
    async fn create(&self, contact: ContactUsEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ContactUsEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ContactUsEntity, AppError>;
    async fn update(&self, contact: ContactUsEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgContactUsRepository {
    pool: PgPool,
}

impl PgContactUsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactUsRepository for PgContactUsRepository {
    async fn create(&self, contact: ContactUsEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO contact_us (company_name, location_name, address, phone_number) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&contact.company_name)
        .bind(&contact.location_name)
        .bind(&contact.address)
        .bind(&contact.phone_number)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create contact: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ContactUsEntity>, AppError> {
        let rows = sqlx::query_as::<_, ContactUsRow>(
            "SELECT id, company_name, location_name, address, phone_number FROM contact_us \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all contacts: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(ContactUsEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ContactUsEntity, AppError> {
        let row = sqlx::query_as::<_, ContactUsRow>(
            "SELECT id, company_name, location_name, address, phone_number FROM contact_us \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id contact: {}", e);
            AppError::from(e)
        })?;

        row.map(ContactUsEntity::from)
            .ok_or(AppError::NotFound("contact"))
    }

    async fn update(&self, contact: ContactUsEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(contact.id).await?;

        sqlx::query(
            "UPDATE contact_us SET company_name = $1, location_name = $2, address = $3, \
             phone_number = $4, updated_at = now() WHERE id = $5",
        )
        .bind(&contact.company_name)
        .bind(&contact.location_name)
        .bind(&contact.address)
        .bind(&contact.phone_number)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update contact: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE contact_us SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete contact: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
