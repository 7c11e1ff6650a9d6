use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::ServiceDetailEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct ServiceDetailRequest {
    #[serde(default)]
    pub service_id: i64,
    #[serde(default)]
    pub path_image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ServiceDetailRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.service_id <= 0 {
            return Err(AppError::validation("service_id is required"));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> ServiceDetailEntity {
        ServiceDetailEntity {
            id,
            service_id: self.service_id,
            path_image: self.path_image,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceDetailResponse {
    pub id: i64,
    pub service_id: i64,
    pub path_image: String,
    pub title: String,
    pub description: String,
}

impl From<ServiceDetailEntity> for ServiceDetailResponse {
    fn from(d: ServiceDetailEntity) -> Self {
        Self {
            id: d.id,
            service_id: d.service_id,
            path_image: d.path_image,
            title: d.title,
            description: d.description,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let details = state.service_detail_service.fetch_all().await?;
    let body: Vec<ServiceDetailResponse> =
        details.into_iter().map(ServiceDetailResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all service details", body))
}

pub async fn fetch_by_service_id(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let service_id = parse_id(&service_id)?;
    let detail = state
        .service_detail_service
        .fetch_by_service_id(service_id)
        .await?;
    Ok(ApiResponse::ok_with(
        "Success fetch service detail by service",
        ServiceDetailResponse::from(detail),
    ))
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
    let detail = state.service_detail_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch service detail by ID",
        ServiceDetailResponse::from(detail),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ServiceDetailRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.service_detail_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create service detail"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ServiceDetailRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .service_detail_service
        .edit_by_id(req.into_entity(id))
        .await?;
    Ok(ApiResponse::ok("Success edit service detail"))
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
    state.service_detail_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete service detail"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/service-details/admin", post(create).get(fetch_all))
        .route(
            "/service-details/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/service-details", get(fetch_all))
        .route("/service-details/service/:service_id", get(fetch_by_service_id))
        .merge(admin)
}
