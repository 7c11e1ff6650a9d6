use sqlx::FromRow;

use crate::domain::entity::ServiceDetailEntity;

#[derive(Debug, Clone, FromRow)]
pub struct ServiceDetailRow {
    pub id: i64,
    pub service_id: i64,
    pub path_image: String,
    pub title: String,
    pub description: String,
}

impl From<ServiceDetailRow> for ServiceDetailEntity {
    fn from(row: ServiceDetailRow) -> Self {
        Self {
            id: row.id,
            service_id: row.service_id,
            path_image: row.path_image,
            title: row.title,
            description: row.description,
        }
    }
}
