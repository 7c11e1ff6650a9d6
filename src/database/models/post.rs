use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::domain::entity::PostEntity;

#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub featured_image: String,
    pub content: String,
    pub published_at: NaiveDateTime,
}

impl From<PostRow> for PostEntity {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            author: row.author,
            featured_image: row.featured_image,
            content: row.content,
            published_at: row.published_at,
        }
    }
}
