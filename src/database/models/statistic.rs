use sqlx::FromRow;

use crate::domain::entity::StatisticEntity;

#[derive(Debug, Clone, FromRow)]
pub struct StatisticRow {
    pub id: i64,
    pub name: String,
    pub total: i64,
    pub icon: String,
}

impl From<StatisticRow> for StatisticEntity {
    fn from(row: StatisticRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            total: row.total,
            icon: row.icon,
        }
    }
}
