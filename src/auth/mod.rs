use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric user id; the principal for admin-gated operations.
    pub sub: i64,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        Self {
            sub: user_id,
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

pub fn generate_jwt(claims: &Claims) -> Result<String, AppError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        tracing::error!("JWT_SECRET is not configured");
        return Err(AppError::Unauthorized);
    }

    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        AppError::Unauthorized
    })
}

/// Verify signature and expiry, returning the claims. Verification happens
/// in middleware before any handler runs.
pub fn verify_jwt(token: &str) -> Result<Claims, AppError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(AppError::Unauthorized);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!("password hashing failed: {}", e);
            AppError::WrongCredentials
        })
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_roundtrip_verifies() {
        let hash = hash_password("kata-sandi-rahasia").unwrap();
        assert!(verify_password("kata-sandi-rahasia", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-hash"));
    }

    #[test]
    fn jwt_roundtrip_when_secret_present() {
        // CONFIG is a process-wide singleton; only run the roundtrip when a
        // secret was provided to the test environment.
        if config::config().security.jwt_secret.is_empty() {
            return;
        }
        let token = generate_jwt(&Claims::new(42)).unwrap();
        let claims = verify_jwt(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }
}
