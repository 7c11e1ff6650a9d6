use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::{AboutCompanyEntity, AboutCompanyKeynoteEntity};
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct AboutCompanyRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path_image: String,
}

impl AboutCompanyRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.description.trim().is_empty() {
            return Err(AppError::validation("description is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> AboutCompanyEntity {
        AboutCompanyEntity {
            id,
            description: self.description,
            path_image: self.path_image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AboutCompanyResponse {
    pub id: i64,
    pub description: String,
    pub path_image: String,
}

impl From<AboutCompanyEntity> for AboutCompanyResponse {
    fn from(c: AboutCompanyEntity) -> Self {
        Self {
            id: c.id,
            description: c.description,
            path_image: c.path_image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AboutCompanyKeynoteRequest {
    #[serde(default)]
    pub about_company_id: i64,
    #[serde(default)]
    pub keynote: String,
    #[serde(default)]
    pub path_image: String,
}

impl AboutCompanyKeynoteRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.about_company_id <= 0 {
            return Err(AppError::validation("about_company_id is required"));
        }
        if self.keynote.trim().is_empty() {
            return Err(AppError::validation("keynote is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> AboutCompanyKeynoteEntity {
        AboutCompanyKeynoteEntity {
            id,
            about_company_id: self.about_company_id,
            keynote: self.keynote,
            path_image: self.path_image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AboutCompanyKeynoteResponse {
    pub id: i64,
    pub about_company_id: i64,
    pub keynote: String,
    pub path_image: String,
}

impl From<AboutCompanyKeynoteEntity> for AboutCompanyKeynoteResponse {
    fn from(k: AboutCompanyKeynoteEntity) -> Self {
        Self {
            id: k.id,
            about_company_id: k.about_company_id,
            keynote: k.keynote,
            path_image: k.path_image,
        }
    }
}

pub async fn fetch_all_companies(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let companies = state.about_company_service.fetch_all().await?;
    let body: Vec<AboutCompanyResponse> =
        companies.into_iter().map(AboutCompanyResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all about companies", body))
}

pub async fn fetch_company_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let company = state.about_company_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch about company by ID",
        AboutCompanyResponse::from(company),
    ))
}

pub async fn create_company(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<AboutCompanyRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.about_company_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create about company"))
}

pub async fn edit_company_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<AboutCompanyRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.about_company_service.edit_by_id(req.into_entity(id)).await?;
    Ok(ApiResponse::ok("Success edit about company"))
}

pub async fn delete_company_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    state.about_company_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete about company"))
}

pub async fn fetch_all_keynotes(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let keynotes = state.about_company_keynote_service.fetch_all().await?;
    let body: Vec<AboutCompanyKeynoteResponse> = keynotes
        .into_iter()
        .map(AboutCompanyKeynoteResponse::from)
        .collect();
    Ok(ApiResponse::ok_with("Success fetch all keynotes", body))
}

pub async fn fetch_keynotes_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let company_id = parse_id(&company_id)?;
    let keynotes = state
        .about_company_keynote_service
        .fetch_by_company_id(company_id)
        .await?;
    let body: Vec<AboutCompanyKeynoteResponse> = keynotes
        .into_iter()
        .map(AboutCompanyKeynoteResponse::from)
        .collect();
    Ok(ApiResponse::ok_with("Success fetch keynotes by company", body))
}

pub async fn fetch_keynote_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let keynote = state.about_company_keynote_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch keynote by ID",
        AboutCompanyKeynoteResponse::from(keynote),
    ))
}

pub async fn create_keynote(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<AboutCompanyKeynoteRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .about_company_keynote_service
        .create(req.into_entity(0))
        .await?;
    Ok(ApiResponse::created("Success create keynote"))
}

pub async fn edit_keynote_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<AboutCompanyKeynoteRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .about_company_keynote_service
        .edit_by_id(req.into_entity(id))
        .await?;
    Ok(ApiResponse::ok("Success edit keynote"))
}

pub async fn delete_keynote_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    state.about_company_keynote_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete keynote"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route(
            "/about-companies/admin",
            post(create_company).get(fetch_all_companies),
        )
        .route(
            "/about-companies/admin/:id",
            get(fetch_company_by_id)
                .put(edit_company_by_id)
                .delete(delete_company_by_id),
        )
        .route(
            "/about-company-keynotes/admin",
            post(create_keynote).get(fetch_all_keynotes),
        )
        .route(
            "/about-company-keynotes/admin/:id",
            get(fetch_keynote_by_id)
                .put(edit_keynote_by_id)
                .delete(delete_keynote_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/about-companies", get(fetch_all_companies))
        .route("/about-company-keynotes", get(fetch_all_keynotes))
        .route(
            "/about-company-keynotes/company/:company_id",
            get(fetch_keynotes_by_company),
        )
        .merge(admin)
}
