use sqlx::FromRow;

use crate::domain::entity::ProfileEntity;

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<ProfileRow> for ProfileEntity {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
        }
    }
}
