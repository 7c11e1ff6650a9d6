use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::OurTeamEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct OurTeamRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub path_photo: String,
}

impl OurTeamRequest {
    fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("name", &self.name),
            ("role", &self.role),
            ("path_photo", &self.path_photo),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> OurTeamEntity {
        OurTeamEntity {
            id,
            name: self.name,
            role: self.role,
            tagline: self.tagline,
            path_photo: self.path_photo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OurTeamResponse {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub path_photo: String,
}

impl From<OurTeamEntity> for OurTeamResponse {
    fn from(m: OurTeamEntity) -> Self {
        Self {
            id: m.id,
            name: m.name,
            role: m.role,
            tagline: m.tagline,
            path_photo: m.path_photo,
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let members = state.our_team_service.fetch_all().await?;
    let body: Vec<OurTeamResponse> = members.into_iter().map(OurTeamResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all team members", body))
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
    let member = state.our_team_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch team member by ID",
        OurTeamResponse::from(member),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<OurTeamRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.our_team_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create team member"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<OurTeamRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.our_team_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit team member"))
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
    state.our_team_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete team member"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/our-teams/admin", post(create).get(fetch_all))
        .route(
            "/our-teams/admin/:id",
            get(fetch_by_id).put(edit_by_id).delete(delete_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/our-teams", get(fetch_all))
        .merge(admin)
}
