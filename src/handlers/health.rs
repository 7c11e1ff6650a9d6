use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::database::health_check;
use crate::AppState;

pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "meta": { "status": true, "message": "OK" },
                "data": null,
                "pagination": null,
            })),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] database unreachable: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "meta": { "status": false, "message": "database unreachable" },
                })),
            )
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/check", get(check))
}
