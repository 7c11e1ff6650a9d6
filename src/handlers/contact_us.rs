use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::ContactUsEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct ContactUsRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
}

impl ContactUsRequest {
    fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("company_name", &self.company_name),
            ("location_name", &self.location_name),
            ("address", &self.address),
            ("phone_number", &self.phone_number),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> ContactUsEntity {
        ContactUsEntity {
            id,
            company_name: self.company_name,
            location_name: self.location_name,
            address: self.address,
            phone_number: self.phone_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactUsResponse {
    pub id: i64,
    pub company_name: String,
    pub location_name: String,
    pub address: String,
    pub phone_number: String,
}

impl From<ContactUsEntity> for ContactUsResponse {
    fn from(c: ContactUsEntity) -> Self {
        Self {
            id: c.id,
            company_name: c.company_name,
            location_name: c.location_name,
            address: c.address,
            phone_number: c.phone_number,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let contacts = state.contact_us_service.fetch_all().await?;
    let body: Vec<ContactUsResponse> = contacts.into_iter().map(ContactUsResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all contacts", body))
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
    let contact = state.contact_us_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with("Success fetch contact by ID", ContactUsResponse::from(contact)))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ContactUsRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.contact_us_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create contact"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ContactUsRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.contact_us_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit contact"))
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
    state.contact_us_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete contact"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/contact-us/admin", post(create).get(fetch_all))
        .route(
            "/contact-us/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/contact-us", get(fetch_all))
        .merge(admin)
}
