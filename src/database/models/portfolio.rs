use sqlx::FromRow;

use crate::domain::entity::{
    PortfolioDetailEntity, PortfolioSectionEntity, PortfolioTestimonialEntity,
};

#[derive(Debug, Clone, FromRow)]
pub struct PortfolioSectionRow {
    pub id: i64,
    pub name: String,
    pub tagline: String,
    pub thumbnail: String,
}

impl From<PortfolioSectionRow> for PortfolioSectionEntity {
    fn from(row: PortfolioSectionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            tagline: row.tagline,
            thumbnail: row.thumbnail,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PortfolioDetailRow {
    pub id: i64,
    pub portfolio_section_id: i64,
    pub category: String,
    pub client_name: String,
    pub project_date: String,
    pub project_url: String,
    pub title: String,
    pub description: String,
}

impl From<PortfolioDetailRow> for PortfolioDetailEntity {
    fn from(row: PortfolioDetailRow) -> Self {
        Self {
            id: row.id,
            portfolio_section_id: row.portfolio_section_id,
            category: row.category,
            client_name: row.client_name,
            project_date: row.project_date,
            project_url: row.project_url,
            title: row.title,
            description: row.description,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PortfolioTestimonialRow {
    pub id: i64,
    pub portfolio_section_id: i64,
    pub thumbnail: String,
    pub message: String,
    pub client_name: String,
    pub role: String,
}

impl From<PortfolioTestimonialRow> for PortfolioTestimonialEntity {
    fn from(row: PortfolioTestimonialRow) -> Self {
        Self {
            id: row.id,
            portfolio_section_id: row.portfolio_section_id,
            thumbnail: row.thumbnail,
            message: row.message,
            client_name: row.client_name,
            role: row.role,
        }
    }
}
