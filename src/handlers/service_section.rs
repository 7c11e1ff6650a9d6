use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::ServiceSectionEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct ServiceSectionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub path_icon: String,
}

impl ServiceSectionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if self.path_icon.trim().is_empty() {
            return Err(AppError::validation("path_icon is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> ServiceSectionEntity {
        ServiceSectionEntity {
            id,
            name: self.name,
            tagline: self.tagline,
            path_icon: self.path_icon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceSectionResponse {
    pub id: i64,
    pub name: String,
    pub tagline: String,
    pub path_icon: String,
}

impl From<ServiceSectionEntity> for ServiceSectionResponse {
    fn from(s: ServiceSectionEntity) -> Self {
        Self {
            id: s.id,
            name: s.name,
            tagline: s.tagline,
            path_icon: s.path_icon,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let sections = state.service_section_service.fetch_all().await?;
    let body: Vec<ServiceSectionResponse> =
        sections.into_iter().map(ServiceSectionResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all service sections", body))
}

pub async fn fetch_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let id = parse_id(&id)?;
    let section = state.service_section_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch service section by ID",
        ServiceSectionResponse::from(section),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ServiceSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.service_section_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create service section"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ServiceSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.service_section_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit service section"))
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
    state.service_section_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete service section"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/service-sections/admin", post(create).get(fetch_all))
        .route(
            "/service-sections/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/service-sections", get(fetch_all))
        .route("/service-sections/:id", get(fetch_by_id))
        .merge(admin)
}
