use sqlx::FromRow;

use crate::domain::entity::ServiceSectionEntity;

#[derive(Debug, Clone, FromRow)]
pub struct ServiceSectionRow {
    pub id: i64,
    pub name: String,
    pub tagline: String,
    pub path_icon: String,
}

impl From<ServiceSectionRow> for ServiceSectionEntity {
    fn from(row: ServiceSectionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            tagline: row.tagline,
            path_icon: row.path_icon,
        }
    }
}
