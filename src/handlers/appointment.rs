use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::api::format::{display_timestamp, parse_request_date};
use crate::domain::entity::AppointmentEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    #[serde(default)]
    pub service_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub meet_at: String,
}

impl AppointmentRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.service_id <= 0 {
            return Err(AppError::validation("service_id is required"));
        }
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone_number", &self.phone_number),
            ("brief", &self.brief),
            ("meet_at", &self.meet_at),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    fn into_entity(self) -> Result<AppointmentEntity, AppError> {
        let meet_at = parse_request_date("meet_at", &self.meet_at)?;
        Ok(AppointmentEntity {
            id: 0,
            service_id: self.service_id,
            service_name: String::new(),
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            brief: self.brief,
            budget: self.budget,
            meet_at,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub brief: String,
    pub budget: i64,
    pub meet_at: String,
}

impl From<AppointmentEntity> for AppointmentResponse {
    fn from(a: AppointmentEntity) -> Self {
        Self {
            id: a.id,
            service_id: a.service_id,
            service_name: a.service_name,
            name: a.name,
            email: a.email,
            phone_number: a.phone_number,
            brief: a.brief,
            budget: a.budget,
            meet_at: display_timestamp(a.meet_at),
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AppointmentRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.appointment_service.create(req.into_entity()?).await?;
    Ok(ApiResponse::created("Success create appointment"))
}

pub async fn fetch_all(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let appointments = state.appointment_service.fetch_all().await?;
    let body: Vec<AppointmentResponse> =
        appointments.into_iter().map(AppointmentResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all appointments", body))
}

pub async fn fetch_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let appointment = state.appointment_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch appointment by ID",
        AppointmentResponse::from(appointment),
    ))
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    state.appointment_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete appointment"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/appointments/admin", get(fetch_all))
        .route("/appointments/admin/:id", get(fetch_by_id).delete(delete_by_id))
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/appointments", post(create))
        .merge(admin)
}
