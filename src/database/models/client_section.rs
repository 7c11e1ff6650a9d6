use sqlx::FromRow;

use crate::domain::entity::ClientSectionEntity;

#[derive(Debug, Clone, FromRow)]
pub struct ClientSectionRow {
    pub id: i64,
    pub name: String,
    pub path_icon: String,
}

impl From<ClientSectionRow> for ClientSectionEntity {
    fn from(row: ClientSectionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            path_icon: row.path_icon,
        }
    }
}
