use sqlx::FromRow;

use crate::domain::entity::{AboutCompanyEntity, AboutCompanyKeynoteEntity};

#[derive(Debug, Clone, FromRow)]
pub struct AboutCompanyRow {
    pub id: i64,
    pub description: String,
    pub path_image: String,
}

impl From<AboutCompanyRow> for AboutCompanyEntity {
    fn from(row: AboutCompanyRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            path_image: row.path_image,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct AboutCompanyKeynoteRow {
    pub id: i64,
    pub about_company_id: i64,
    pub keynote: String,
    pub path_image: String,
}

impl From<AboutCompanyKeynoteRow> for AboutCompanyKeynoteEntity {
    fn from(row: AboutCompanyKeynoteRow) -> Self {
        Self {
            id: row.id,
            about_company_id: row.about_company_id,
            keynote: row.keynote,
            path_image: row.path_image,
        }
    }
}
