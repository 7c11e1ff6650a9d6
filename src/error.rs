// HTTP API error taxonomy and status mapping
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::api::envelope::Envelope;

/// Every failure a request pipeline can surface. Layers return these
/// unchanged up the call chain; only `status_code()` maps them to HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Wrong email or password")]
    WrongCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("slug '{0}' already exists")]
    SlugConflict(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Fixed error-kind to status-code table. Unrecognized kinds (the
    /// catch-all database variant) map to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::WrongCredentials => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlugConflict(_) => StatusCode::CONFLICT,
            // Repositories map missing rows to NotFound themselves, so any
            // sqlx error that reaches here is a real fault.
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message. Raw database errors are logged at the edge and
    /// replaced with a generic message.
    pub fn message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("database error: {}", e);
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(Envelope::failure(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_matches_taxonomy() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::validation("title is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::WrongCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("post").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::SlugConflict("hello-world".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // Missing rows are translated to NotFound before they become a
        // Database error, so RowNotFound is just another 500.
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn conflict_names_the_offending_slug() {
        let err = AppError::SlugConflict("hello-world".into());
        assert_eq!(err.message(), "slug 'hello-world' already exists");
    }

    #[test]
    fn database_errors_are_not_exposed() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.message(), "internal server error");
    }
}
