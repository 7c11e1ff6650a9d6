use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::portfolio::{
    PortfolioDetailRow, PortfolioSectionRow, PortfolioTestimonialRow,
};
use crate::domain::entity::{
    PortfolioDetailEntity, PortfolioSectionEntity, PortfolioTestimonialEntity,
};
use crate::error::AppError;

#[async_trait]
pub trait PortfolioSectionRepository: Send + Sync {
    async fn create(&self, section: PortfolioSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PortfolioSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioSectionEntity, AppError>;
    async fn update(&self, section: PortfolioSectionEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait PortfolioDetailRepository: Send + Sync {
    async fn create(&self, detail: PortfolioDetailEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PortfolioDetailEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioDetailEntity, AppError>;
    async fn update(&self, detail: PortfolioDetailEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait PortfolioTestimonialRepository: Send + Sync {
    async fn create(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PortfolioTestimonialEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioTestimonialEntity, AppError>;
    async fn update(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgPortfolioSectionRepository {
    pool: PgPool,
}

impl PgPortfolioSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioSectionRepository for PgPortfolioSectionRepository {
    async fn create(&self, section: PortfolioSectionEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO portfolio_sections (name, tagline, thumbnail) VALUES ($1, $2, $3)",
        )
        .bind(&section.name)
        .bind(&section.tagline)
        .bind(&section.thumbnail)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create portfolio section: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<PortfolioSectionEntity>, AppError> {
        let rows = sqlx::query_as::<_, PortfolioSectionRow>(
            "SELECT id, name, tagline, thumbnail FROM portfolio_sections \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all portfolio sections: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(PortfolioSectionEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioSectionEntity, AppError> {
        let row = sqlx::query_as::<_, PortfolioSectionRow>(
            "SELECT id, name, tagline, thumbnail FROM portfolio_sections \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id portfolio section: {}", e);
            AppError::from(e)
        })?;

        row.map(PortfolioSectionEntity::from)
            .ok_or(AppError::NotFound("portfolio section"))
    }

    async fn update(&self, section: PortfolioSectionEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(section.id).await?;

        sqlx::query(
            "UPDATE portfolio_sections SET name = $1, tagline = $2, thumbnail = $3, \
             updated_at = now() WHERE id = $4",
        )
        .bind(&section.name)
        .bind(&section.tagline)
        .bind(&section.thumbnail)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update portfolio section: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE portfolio_sections SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete portfolio section: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

pub struct PgPortfolioDetailRepository {
    pool: PgPool,
}

impl PgPortfolioDetailRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioDetailRepository for PgPortfolioDetailRepository {
    async fn create(&self, detail: PortfolioDetailEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO portfolio_details (portfolio_section_id, category, client_name, \
             project_date, project_url, title, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(detail.portfolio_section_id)
        .bind(&detail.category)
        .bind(&detail.client_name)
        .bind(&detail.project_date)
        .bind(&detail.project_url)
        .bind(&detail.title)
        .bind(&detail.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create portfolio detail: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<PortfolioDetailEntity>, AppError> {
        let rows = sqlx::query_as::<_, PortfolioDetailRow>(
            "SELECT id, portfolio_section_id, category, client_name, project_date, \
             project_url, title, description FROM portfolio_details \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all portfolio details: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(PortfolioDetailEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioDetailEntity, AppError> {
        let row = sqlx::query_as::<_, PortfolioDetailRow>(
            "SELECT id, portfolio_section_id, category, client_name, project_date, \
             project_url, title, description FROM portfolio_details \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id portfolio detail: {}", e);
            AppError::from(e)
        })?;

        row.map(PortfolioDetailEntity::from)
            .ok_or(AppError::NotFound("portfolio detail"))
    }

    async fn update(&self, detail: PortfolioDetailEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(detail.id).await?;

        sqlx::query(
            "UPDATE portfolio_details SET portfolio_section_id = $1, category = $2, \
             client_name = $3, project_date = $4, project_url = $5, title = $6, \
             description = $7, updated_at = now() WHERE id = $8",
        )
        .bind(detail.portfolio_section_id)
        .bind(&detail.category)
        .bind(&detail.client_name)
        .bind(&detail.project_date)
        .bind(&detail.project_url)
        .bind(&detail.title)
        .bind(&detail.description)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update portfolio detail: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE portfolio_details SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete portfolio detail: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

pub struct PgPortfolioTestimonialRepository {
    pool: PgPool,
}

impl PgPortfolioTestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioTestimonialRepository for PgPortfolioTestimonialRepository {
    async fn create(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO portfolio_testimonials (portfolio_section_id, thumbnail, message, \
             client_name, role) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(testimonial.portfolio_section_id)
        .bind(&testimonial.thumbnail)
        .bind(&testimonial.message)
        .bind(&testimonial.client_name)
        .bind(&testimonial.role)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create portfolio testimonial: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<PortfolioTestimonialEntity>, AppError> {
        let rows = sqlx::query_as::<_, PortfolioTestimonialRow>(
            "SELECT id, portfolio_section_id, thumbnail, message, client_name, role \
             FROM portfolio_testimonials \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all portfolio testimonials: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(PortfolioTestimonialEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioTestimonialEntity, AppError> {
        let row = sqlx::query_as::<_, PortfolioTestimonialRow>(
            "SELECT id, portfolio_section_id, thumbnail, message, client_name, role \
             FROM portfolio_testimonials \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id portfolio testimonial: {}", e);
            AppError::from(e)
        })?;

        row.map(PortfolioTestimonialEntity::from)
            .ok_or(AppError::NotFound("portfolio testimonial"))
    }

    async fn update(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError> {
        let current = self.fetch_by_id(testimonial.id).await?;

        sqlx::query(
            "UPDATE portfolio_testimonials SET portfolio_section_id = $1, thumbnail = $2, \
             message = $3, client_name = $4, role = $5, updated_at = now() WHERE id = $6",
        )
        .bind(testimonial.portfolio_section_id)
        .bind(&testimonial.thumbnail)
        .bind(&testimonial.message)
        .bind(&testimonial.client_name)
        .bind(&testimonial.role)
        .bind(current.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] update portfolio testimonial: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE portfolio_testimonials SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete portfolio testimonial: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
