use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::appointment::AppointmentRow;
use crate::domain::entity::AppointmentEntity;
use crate::error::AppError;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Inserts the booking and returns the stored contact email for the
    /// confirmation side effect.
    async fn create(&self, appointment: AppointmentEntity) -> Result<String, AppError>;
    async fn fetch_all(&self) -> Result<Vec<AppointmentEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<AppointmentEntity, AppError>;
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_JOINED: &str =
    "SELECT a.id, a.service_id, ss.name AS service_name, a.name, a.email, a.phone_number, \
     a.brief, a.budget, a.meet_at \
     FROM appointments a INNER JOIN service_sections ss ON ss.id = a.service_id";

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn create(&self, appointment: AppointmentEntity) -> Result<String, AppError> {
        let email: String = sqlx::query_scalar(
            "INSERT INTO appointments (service_id, name, email, phone_number, brief, budget, meet_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING email",
        )
        .bind(appointment.service_id)
        .bind(&appointment.name)
        .bind(&appointment.email)
        .bind(&appointment.phone_number)
        .bind(&appointment.brief)
        .bind(appointment.budget)
        .bind(appointment.meet_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] create appointment: {}", e);
            AppError::from(e)
        })?;

        Ok(email)
    }

    async fn fetch_all(&self) -> Result<Vec<AppointmentEntity>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "{} WHERE a.deleted_at IS NULL ORDER BY a.created_at DESC",
            SELECT_JOINED
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_all appointments: {}", e);
            AppError::from(e)
        })?;

        Ok(rows.into_iter().map(AppointmentEntity::from).collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<AppointmentEntity, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "{} WHERE a.id = $1 AND a.deleted_at IS NULL",
            SELECT_JOINED
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[REPOSITORY] fetch_by_id appointment: {}", e);
            AppError::from(e)
        })?;

        row.map(AppointmentEntity::from)
            .ok_or(AppError::NotFound("appointment"))
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let current = self.fetch_by_id(id).await?;

        sqlx::query("UPDATE appointments SET deleted_at = now() WHERE id = $1")
            .bind(current.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("[REPOSITORY] soft_delete appointment: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
