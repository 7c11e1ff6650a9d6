use sqlx::FromRow;

use crate::domain::entity::ContactUsEntity;

#[derive(Debug, Clone, FromRow)]
pub struct ContactUsRow {
    pub id: i64,
    pub company_name: String,
    pub location_name: String,
    pub address: String,
    pub phone_number: String,
}

impl From<ContactUsRow> for ContactUsEntity {
    fn from(row: ContactUsRow) -> Self {
        Self {
            id: row.id,
            company_name: row.company_name,
            location_name: row.location_name,
            address: row.address,
            phone_number: row.phone_number,
        }
    }
}
