use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::HeroSectionEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct HeroSectionRequest {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub sub_heading: String,
    #[serde(default)]
    pub path_video: String,
    #[serde(default)]
    pub banner: String,
}

impl HeroSectionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.heading.trim().is_empty() {
            return Err(AppError::validation("heading is required"));
        }
        if self.banner.trim().is_empty() {
            return Err(AppError::validation("banner is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> HeroSectionEntity {
        HeroSectionEntity {
            id,
            heading: self.heading,
            sub_heading: self.sub_heading,
            path_video: self.path_video,
            banner: self.banner,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeroSectionResponse {
    pub id: i64,
    pub heading: String,
    pub sub_heading: String,
    pub path_video: String,
    pub banner: String,
}

impl From<HeroSectionEntity> for HeroSectionResponse {
    fn from(s: HeroSectionEntity) -> Self {
        Self {
            id: s.id,
            heading: s.heading,
            sub_heading: s.sub_heading,
            path_video: s.path_video,
            banner: s.banner,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let sections = state.hero_section_service.fetch_all().await?;
    let body: Vec<HeroSectionResponse> =
        sections.into_iter().map(HeroSectionResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all hero sections", body))
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
    let section = state.hero_section_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch hero section by ID",
        HeroSectionResponse::from(section),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<HeroSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.hero_section_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create hero section"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<HeroSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.hero_section_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit hero section"))
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
    state.hero_section_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete hero section"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/hero-sections/admin", post(create).get(fetch_all))
        .route(
            "/hero-sections/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/hero-sections", get(fetch_all))
        .merge(admin)
}
