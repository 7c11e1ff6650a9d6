use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};

use crate::auth;
use crate::error::AppError;

/// Authenticated principal extracted from a verified JWT.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Bearer-token middleware for the /admin route trees. Verifies the token
/// and injects `AuthUser` into request extensions; handlers still re-check
/// for a zero principal before doing any other work.
pub async fn check_token(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    let claims = match extract_bearer(&headers).and_then(|token| auth::verify_jwt(&token)) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::error!("[MIDDLEWARE] check_token: rejected credential");
            return err.into_response();
        }
    };

    request.extensions_mut().insert(AuthUser { user_id: claims.sub });
    next.run(request).await
}

/// Resolve the principal id from an optional extension; `0` means absent.
pub fn principal_id(auth: &Option<Extension<AuthUser>>) -> i64 {
    auth.as_ref().map(|ext| ext.user_id).unwrap_or(0)
}

fn extract_bearer(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = value.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;
    if token.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_defaults_to_zero_without_extension() {
        assert_eq!(principal_id(&None), 0);
        assert_eq!(principal_id(&Some(Extension(AuthUser { user_id: 7 }))), 7);
    }

    #[test]
    fn bearer_extraction_requires_prefix_and_payload() {
        let mut headers = HeaderMap::new();
        assert!(extract_bearer(&headers).is_err());

        headers.insert("authorization", "Token abc".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        headers.insert("authorization", "Bearer ".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }
}
