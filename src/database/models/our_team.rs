use sqlx::FromRow;

use crate::domain::entity::OurTeamEntity;

#[derive(Debug, Clone, FromRow)]
pub struct OurTeamRow {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub path_photo: String,
}

impl From<OurTeamRow> for OurTeamEntity {
    fn from(row: OurTeamRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            role: row.role,
            tagline: row.tagline,
            path_photo: row.path_photo,
        }
    }
}
