use sqlx::FromRow;

use crate::domain::entity::FaqSectionEntity;

#[derive(Debug, Clone, FromRow)]
pub struct FaqSectionRow {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl From<FaqSectionRow> for FaqSectionEntity {
    fn from(row: FaqSectionRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}
