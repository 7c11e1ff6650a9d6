use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::domain::entity::{
    PortfolioDetailEntity, PortfolioSectionEntity, PortfolioTestimonialEntity,
};
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct PortfolioSectionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl PortfolioSectionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> PortfolioSectionEntity {
        PortfolioSectionEntity {
            id,
            name: self.name,
            tagline: self.tagline,
            thumbnail: self.thumbnail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioSectionResponse {
    pub id: i64,
    pub name: String,
    pub tagline: String,
    pub thumbnail: String,
}

impl From<PortfolioSectionEntity> for PortfolioSectionResponse {
    fn from(s: PortfolioSectionEntity) -> Self {
        Self {
            id: s.id,
            name: s.name,
            tagline: s.tagline,
            thumbnail: s.thumbnail,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PortfolioDetailRequest {
    #[serde(default)]
    pub portfolio_section_id: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub project_date: String,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl PortfolioDetailRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.portfolio_section_id <= 0 {
            return Err(AppError::validation("portfolio_section_id is required"));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> PortfolioDetailEntity {
        PortfolioDetailEntity {
            id,
            portfolio_section_id: self.portfolio_section_id,
            category: self.category,
            client_name: self.client_name,
            project_date: self.project_date,
            project_url: self.project_url,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioDetailResponse {
    pub id: i64,
    pub portfolio_section_id: i64,
    pub category: String,
    pub client_name: String,
    pub project_date: String,
    pub project_url: String,
    pub title: String,
    pub description: String,
}

impl From<PortfolioDetailEntity> for PortfolioDetailResponse {
    fn from(d: PortfolioDetailEntity) -> Self {
        Self {
            id: d.id,
            portfolio_section_id: d.portfolio_section_id,
            category: d.category,
            client_name: d.client_name,
            project_date: d.project_date,
            project_url: d.project_url,
            title: d.title,
            description: d.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PortfolioTestimonialRequest {
    #[serde(default)]
    pub portfolio_section_id: i64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub role: String,
}

impl PortfolioTestimonialRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.portfolio_section_id <= 0 {
            return Err(AppError::validation("portfolio_section_id is required"));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::validation("message is required"));
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> PortfolioTestimonialEntity {
        PortfolioTestimonialEntity {
            id,
            portfolio_section_id: self.portfolio_section_id,
            thumbnail: self.thumbnail,
            message: self.message,
            client_name: self.client_name,
            role: self.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioTestimonialResponse {
    pub id: i64,
    pub portfolio_section_id: i64,
    pub thumbnail: String,
    pub message: String,
    pub client_name: String,
    pub role: String,
}

impl From<PortfolioTestimonialEntity> for PortfolioTestimonialResponse {
    fn from(t: PortfolioTestimonialEntity) -> Self {
        Self {
            id: t.id,
            portfolio_section_id: t.portfolio_section_id,
            thumbnail: t.thumbnail,
            message: t.message,
            client_name: t.client_name,
            role: t.role,
        }
    }
}

pub async fn fetch_all_sections(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let sections = state.portfolio_section_service.fetch_all().await?;
    let body: Vec<PortfolioSectionResponse> = sections
        .into_iter()
        .map(PortfolioSectionResponse::from)
        .collect();
    Ok(ApiResponse::ok_with("Success fetch all portfolio sections", body))
}

pub async fn fetch_section_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let section = state.portfolio_section_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch portfolio section by ID",
        PortfolioSectionResponse::from(section),
    ))
}

pub async fn create_section(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PortfolioSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.portfolio_section_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create portfolio section"))
}

pub async fn edit_section_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PortfolioSectionRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .portfolio_section_service
        .edit_by_id(req.into_entity(id))
        .await?;
    Ok(ApiResponse::ok("Success edit portfolio section"))
}

pub async fn delete_section_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    state.portfolio_section_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete portfolio section"))
}

pub async fn fetch_all_details(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let details = state.portfolio_detail_service.fetch_all().await?;
    let body: Vec<PortfolioDetailResponse> = details
        .into_iter()
        .map(PortfolioDetailResponse::from)
        .collect();
    Ok(ApiResponse::ok_with("Success fetch all portfolio details", body))
}

pub async fn fetch_detail_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let detail = state.portfolio_detail_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch portfolio detail by ID",
        PortfolioDetailResponse::from(detail),
    ))
}

pub async fn create_detail(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PortfolioDetailRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.portfolio_detail_service.create(req.into_entity(0)).await?;
    Ok(ApiResponse::created("Success create portfolio detail"))
}

pub async fn edit_detail_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PortfolioDetailRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .portfolio_detail_service
        .edit_by_id(req.into_entity(id))
        .await?;
    Ok(ApiResponse::ok("Success edit portfolio detail"))
}

pub async fn delete_detail_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    state.portfolio_detail_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete portfolio detail"))
}

pub async fn fetch_all_testimonials(
    State(state): State<AppState>,
) -> Result<ApiResponse, AppError> {
    let testimonials = state.portfolio_testimonial_service.fetch_all().await?;
    let body: Vec<PortfolioTestimonialResponse> = testimonials
        .into_iter()
        .map(PortfolioTestimonialResponse::from)
        .collect();
    Ok(ApiResponse::ok_with("Success fetch all portfolio testimonials", body))
}

pub async fn fetch_testimonial_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let testimonial = state.portfolio_testimonial_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with(
        "Success fetch portfolio testimonial by ID",
        PortfolioTestimonialResponse::from(testimonial),
    ))
}

pub async fn create_testimonial(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PortfolioTestimonialRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .portfolio_testimonial_service
        .create(req.into_entity(0))
        .await?;
    Ok(ApiResponse::created("Success create portfolio testimonial"))
}

pub async fn edit_testimonial_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PortfolioTestimonialRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state
        .portfolio_testimonial_service
        .edit_by_id(req.into_entity(id))
        .await?;
    Ok(ApiResponse::ok("Success edit portfolio testimonial"))
}

pub async fn delete_testimonial_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    state.portfolio_testimonial_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete portfolio testimonial"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route(
            "/portfolio-sections/admin",
            post(create_section).get(fetch_all_sections),
        )
        .route(
            "/portfolio-sections/admin/:id",
            get(fetch_section_by_id)
                .put(edit_section_by_id)
                .delete(delete_section_by_id),
        )
        .route(
            "/portfolio-details/admin",
            post(create_detail).get(fetch_all_details),
        )
        .route(
            "/portfolio-details/admin/:id",
            get(fetch_detail_by_id)
                .put(edit_detail_by_id)
                .delete(delete_detail_by_id),
        )
        .route(
            "/portfolio-testimonials/admin",
            post(create_testimonial).get(fetch_all_testimonials),
        )
        .route(
            "/portfolio-testimonials/admin/:id",
            get(fetch_testimonial_by_id)
                .put(edit_testimonial_by_id)
                .delete(delete_testimonial_by_id),
        )
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/portfolio-sections", get(fetch_all_sections))
        .route("/portfolio-details", get(fetch_all_details))
        .route("/portfolio-testimonials", get(fetch_all_testimonials))
        .merge(admin)
}
