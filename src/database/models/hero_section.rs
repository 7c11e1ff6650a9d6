use sqlx::FromRow;

use crate::domain::entity::HeroSectionEntity;

#[derive(Debug, Clone, FromRow)]
pub struct HeroSectionRow {
    pub id: i64,
    pub heading: String,
    pub sub_heading: String,
    pub path_video: String,
    pub banner: String,
}

impl From<HeroSectionRow> for HeroSectionEntity {
    fn from(row: HeroSectionRow) -> Self {
        Self {
            id: row.id,
            heading: row.heading,
            sub_heading: row.sub_heading,
            path_video: row.path_video,
            banner: row.banner,
        }
    }
}
