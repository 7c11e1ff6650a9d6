use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::FaqSectionEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct FaqSectionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl FaqSectionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::validation("description is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> FaqSectionEntity {
        FaqSectionEntity {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FaqSectionResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl From<FaqSectionEntity> for FaqSectionResponse {
    fn from(f: FaqSectionEntity) -> Self {
        Self {
            id: f.id,
            title: f.title,
            description: f.description,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let faqs = state.faq_section_service.fetch_all().await?;
    let body: Vec<FaqSectionResponse> = faqs.into_iter().map(FaqSectionResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all faqs", body))
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
    let faq = state.faq_section_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with("Success fetch faq by ID", FaqSectionResponse::from(faq)))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<FaqSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.faq_section_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create faq"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<FaqSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.faq_section_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit faq"))
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
    state.faq_section_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete faq"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/faq-sections/admin", post(create).get(fetch_all))
        .route(
            "/faq-sections/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/faq-sections", get(fetch_all))
        .merge(admin)
}
