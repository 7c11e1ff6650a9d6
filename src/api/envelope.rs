// Uniform response envelope shared by every endpoint
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
pub struct Meta {
    pub status: bool,
    pub message: String,
}

/// Failure body: meta only, no data or pagination block.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub meta: Meta,
}

impl Envelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            meta: Meta {
                status: false,
                message: message.into(),
            },
        }
    }
}

/// Success body wrapper. `pagination` is always null; no entity here is
/// paginated.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    message: String,
    data: Value,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: Value::Null,
        }
    }

    pub fn ok_with<T: Serialize>(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    pub fn created(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: message.into(),
            data: Value::Null,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> axum::response::Response {
        let body = json!({
            "meta": { "status": true, "message": self.message },
            "data": self.data,
            "pagination": Value::Null,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_has_meta_only() {
        let v = serde_json::to_value(Envelope::failure("Unauthorized")).unwrap();
        assert_eq!(v, json!({ "meta": { "status": false, "message": "Unauthorized" } }));
    }

    #[test]
    fn success_envelope_carries_null_pagination() {
        let resp = ApiResponse::ok_with("Success fetch all posts", vec![1, 2, 3]);
        let body = json!({
            "meta": { "status": true, "message": resp.message.clone() },
            "data": resp.data.clone(),
            "pagination": Value::Null,
        });
        assert_eq!(body["pagination"], Value::Null);
        assert_eq!(body["meta"]["status"], json!(true));
        assert_eq!(body["data"], json!([1, 2, 3]));
    }
}
