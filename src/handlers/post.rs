use axum::{
    extract::{rejection::JsonRejection, Path, State},
    middleware::from_fn,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::api::format::{display_timestamp, parse_request_date};
use crate::domain::entity::PostEntity;
use crate::error::AppError;
use crate::middleware::auth::{check_token, principal_id, AuthUser};
use crate::AppState;

use super::parse_id;

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published_at: String,
}

impl PostRequest {
    fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("featured_image", &self.featured_image),
            ("content", &self.content),
            ("published_at", &self.published_at),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    fn into_entity(self, id: i64) -> Result<PostEntity, AppError> {
        let published_at = parse_request_date("published_at", &self.published_at)?;
        Ok(PostEntity {
            id,
            title: self.title,
            slug: self.slug,
            author: self.author,
            featured_image: self.featured_image,
            content: self.content,
            published_at,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub featured_image: String,
    pub content: String,
    pub published_at: String,
}

impl From<PostEntity> for PostResponse {
    fn from(post: PostEntity) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            author: post.author,
            featured_image: post.featured_image,
            content: post.content,
            published_at: display_timestamp(post.published_at),
        }
    }
}

pub async fn fetch_all(State(state): State<AppState>) -> Result<ApiResponse, AppError> {
    let posts = state.post_service.fetch_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(ApiResponse::ok_with("Success fetch all posts", body))
}

pub async fn fetch_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let id = parse_id(&id)?;
    let post = state.post_service.fetch_by_id(id).await?;
    Ok(ApiResponse::ok_with("Success fetch post by ID", PostResponse::from(post)))
}

pub async fn fetch_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ApiResponse, AppError> {
    let post = state.post_service.fetch_by_slug(&slug).await?;
    Ok(ApiResponse::ok_with("Success fetch post by slug", PostResponse::from(post)))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    // Auth first: no validation or storage work for an absent principal.
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.post_service.create(req.into_entity(0)?).await?;
    Ok(ApiResponse::created("Success create post"))
}

pub async fn edit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: Option<Extension<AuthUser>>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    if principal_id(&auth) == 0 {
        return Err(AppError::Unauthorized);
    }

    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    state.post_service.edit_by_id(req.into_entity(id)?).await?;
    Ok(ApiResponse::ok("Success edit post"))
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
    state.post_service.delete_by_id(id).await?;
    Ok(ApiResponse::ok("Success delete post"))
}

pub fn routes() -> Router<AppState> {
    let admin = Router::new()
        .route("/posts/admin", post(create))
        .route("/posts/admin/:id", put(edit_by_id).delete(delete_by_id))
        .route_layer(from_fn(check_token));

    Router::new()
        .route("/posts", get(fetch_all))
        .route("/posts/:id", get(fetch_by_id))
        .route("/posts/slug/:slug", get(fetch_by_slug))
        .merge(admin)
}
