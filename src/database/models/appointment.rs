use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::domain::entity::AppointmentEntity;

/// Appointment joined with its owning service section's name.
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentRow {
    pub id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub brief: String,
    pub budget: i64,
    pub meet_at: NaiveDateTime,
}

impl From<AppointmentRow> for AppointmentEntity {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            service_id: row.service_id,
            service_name: row.service_name,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            brief: row.brief,
            budget: row.budget,
            meet_at: row.meet_at,
        }
    }
}
