use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::ProfileEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl ProfileRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::validation("content is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> ProfileEntity {
        ProfileEntity {
            id,
            title: self.title,
            content: self.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<ProfileEntity> for ProfileResponse {
    fn from(p: ProfileEntity) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
        }
    }
}

pub async fn fetch_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let id = parse_id(&id)?;
    let profile = state.profile_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with("Success fetch profile by ID", ProfileResponse::from(profile)))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.profile_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit profile"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/profile/admin/:id", put(edit_by_id))
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/profile/:id", get(fetch_by_id))
        .merge(admin)
}
