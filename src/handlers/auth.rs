use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::error::AppError;
use crate::services::auth::LoginToken;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() {
            return Err(AppError::validation("email is required"));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("password is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

impl From<LoginToken> for LoginResponse {
    fn from(t: LoginToken) -> Self {
        Self {
            token: t.token,
            expires_in: t.expires_in,
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    let token = state.auth_service.login(&req.email, &req.password).await?;
    Ok(ApiResponse::ok_with("Success login", LoginResponse::from(token)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}
