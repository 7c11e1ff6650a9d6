use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::StatisticEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct StatisticRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub icon: String,
}

impl StatisticRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if self.icon.trim().is_empty() {
            return Err(AppError::validation("icon is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> StatisticEntity {
        StatisticEntity {
            id,
            name: self.name,
            total: self.total,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticResponse {
    pub id: i64,
    pub name: String,
    pub total: i64,
    pub icon: String,
}

impl From<StatisticEntity> for StatisticResponse {
    fn from(s: StatisticEntity) -> Self {
        Self {
            id: s.id,
            name: s.name,
            total: s.total,
            icon: s.icon,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let stats = state.statistic_service.fetch_all().await?;
    let body: Vec<StatisticResponse> = stats.into_iter().map(StatisticResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all statistics", body))
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
    let stat = state.statistic_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with("Success fetch statistic by ID", StatisticResponse::from(stat)))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<StatisticRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.statistic_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create statistic"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<StatisticRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.statistic_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit statistic"))
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
    state.statistic_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete statistic"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/statistics/admin", post(create).get(fetch_all))
        .route(
            "/statistics/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/statistics", get(fetch_all))
        .merge(admin)
}
