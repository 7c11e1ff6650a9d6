use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::{self, Claims};
use crate::config;
use crate::error::AppError;
use crate::repository::UserRepository;

#[derive(Debug, Serialize)]
pub struct LoginToken {
    pub token: String,
    pub expires_in: u64,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginToken, AppError>;
}

pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl AuthServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, email: &str, password: &str) -> Result<LoginToken, AppError> {
        let user = self.users.fetch_by_email(email).await?;

        if !auth::verify_password(password, &user.password) {
            tracing::error!("[SERVICE] login failed for {}", email);
            return Err(AppError::WrongCredentials);
        }

        let token = auth::generate_jwt(&Claims::new(user.id))?;
        Ok(LoginToken {
            token,
            expires_in: config::config().security.jwt_expiry_hours * 3600,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::UserEntity;

    struct OneUserRepo {
        user: UserEntity,
    }

    #[async_trait]
    impl UserRepository for OneUserRepo {
        async fn fetch_by_email(&self, email: &str) -> Result<UserEntity, AppError> {
            if email == self.user.email {
                Ok(self.user.clone())
            } else {
                Err(AppError::WrongCredentials)
            }
        }
    }

    fn admin() -> UserEntity {
        UserEntity {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: auth::hash_password("s3cret").unwrap(),
        }
    }

    #[tokio::test]
    async fn wrong_password_maps_to_bad_credentials() {
        let service = AuthServiceImpl::new(Arc::new(OneUserRepo { user: admin() }));
        let err = service.login("admin@example.com", "nope").await.unwrap_err();
        assert!(matches!(err, AppError::WrongCredentials));
    }

    #[tokio::test]
    async fn unknown_email_maps_to_bad_credentials() {
        let service = AuthServiceImpl::new(Arc::new(OneUserRepo { user: admin() }));
        let err = service.login("nobody@example.com", "s3cret").await.unwrap_err();
        assert!(matches!(err, AppError::WrongCredentials));
    }

    #[tokio::test]
    async fn correct_credentials_mint_a_token() {
        // Token minting needs a configured secret; skip otherwise.
        if config::config().security.jwt_secret.is_empty() {
            return;
        }
        let service = AuthServiceImpl::new(Arc::new(OneUserRepo { user: admin() }));
        let issued = service.login("admin@example.com", "s3cret").await.unwrap();
        assert!(!issued.token.is_empty());
        assert_eq!(auth::verify_jwt(&issued.token).unwrap().sub, 1);
    }
}
