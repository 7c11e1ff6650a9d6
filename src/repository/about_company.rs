use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::about_company::{AboutCompanyKeynoteRow, AboutCompanyRow};
use crate::domain::entity::{AboutCompanyEntity, AboutCompanyKeynoteEntity};
use crate::error::AppError;

#[async_trait]
pub trait AboutCompanyRepository: Send + Sync {
    async fn create(&self, company: AboutCompanyEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<AboutCompanyEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyEntity, AppError>;
    async fn update(&self, company: AboutCompanyEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait AboutCompanyKeynoteRepository: Send + Sync {
    async fn create(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyKeynoteEntity, AppError>;
    async fn fetch_by_company_id(
        &self,
        company_id: i64,
    ) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError>;
    async fn update(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgAboutCompanyRepository {
    pool: PgPool,
}

impl PgAboutCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AboutCompanyRepository for PgAboutCompanyRepository {
    async fn create(&self, company: AboutCompanyEntity) -> Result<(), AppError> {
        sqlx::query("INSERT INTO about_companies (description, path_image) VALUES ($1, $2)")
            .bind(&company.description)
            .bind(&company.path_image)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] create about company: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<AboutCompanyEntity>, AppError> {
        let rows = sqlx::query_as::<_, AboutCompanyRow>(
            "SELECT id, description, path_image FROM about_companies \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all about companies: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(AboutCompanyEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyEntity, AppError> {
        let row = sqlx::query_as::<_, AboutCompanyRow>(
            "SELECT id, description, path_image FROM about_companies \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id about company: {}", e);
            AppError::from(e)
        })?;

        row.map(AboutCompanyEntity::from)
            .ok_or(AppError::NotFound("about company"))
    }

    async fn update(&self, company: AboutCompanyEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(company.id).await?;

        sqlx::query(
            "UPDATE about_companies SET description = $1, path_image = $2, updated_at = now() \
             WHERE id = $3",
        )
        .bind(&company.description)
        .bind(&company.path_image)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update about company: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE about_companies SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete about company: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

pub struct PgAboutCompanyKeynoteRepository {
    pool: PgPool,
}

impl PgAboutCompanyKeynoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AboutCompanyKeynoteRepository for PgAboutCompanyKeynoteRepository {
    async fn create(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO about_company_keynotes (about_company_id, keynote, path_image) \
             VALUES ($1, $2, $3)",
        )
        .bind(keynote.about_company_id)
        .bind(&keynote.keynote)
        .bind(&keynote.path_image)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create keynote: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError> {
        let rows = sqlx::query_as::<_, AboutCompanyKeynoteRow>(
            "SELECT id, about_company_id, keynote, path_image FROM about_company_keynotes \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all keynotes: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(AboutCompanyKeynoteEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyKeynoteEntity, AppError> {
        let row = sqlx::query_as::<_, AboutCompanyKeynoteRow>(
            "SELECT id, about_company_id, keynote, path_image FROM about_company_keynotes \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id keynote: {}", e);
            AppError::from(e)
        })?;

        row.map(AboutCompanyKeynoteEntity::from)
            .ok_or(AppError::NotFound("keynote"))
    }

    async fn fetch_by_company_id(
        &self,
        company_id: i64,
    ) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError> {
        let rows = sqlx::query_as::<_, AboutCompanyKeynoteRow>(
            "SELECT id, about_company_id, keynote, path_image FROM about_company_keynotes \
             WHERE about_company_id = $1 AND deleted_at IS NULL ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_company_id keynotes: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(AboutCompanyKeynoteEntity::from).collect())
    }

    async fn update(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(keynote.id).await?;

        sqlx::query(
            "UPDATE about_company_keynotes SET about_company_id = $1, keynote = $2, \
             path_image = $3, updated_at = now() WHERE id = $4",
        )
        .bind(keynote.about_company_id)
        .bind(&keynote.keynote)
        .bind(&keynote.path_image)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update keynote: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE about_company_keynotes SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete keynote: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
