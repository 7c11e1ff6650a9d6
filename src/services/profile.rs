use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::ProfileEntity;
use crate::error::AppError;
use crate::repository::ProfileRepository;

#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn fetch_by_id(&self, id: i64) -> Result<ProfileEntity, AppError>;
    async fn edit_by_id(&self, profile: ProfileEntity) -> Result<(), AppError>;
}

pub struct ProfileServiceImpl {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileServiceImpl {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProfileService for ProfileServiceImpl {
    async fn fetch_by_id(&self, id: i64) -> Result<ProfileEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, profile: ProfileEntity) -> Result<(), AppError> {
        self.repo.update(profile).await
    }
}
