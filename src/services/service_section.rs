use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::ServiceSectionEntity;
use crate::error::AppError;
use crate::repository::ServiceSectionRepository;

#[async_trait]
pub trait ServiceSectionService: Send + Sync {
    async fn create(&self, section: ServiceSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ServiceSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ServiceSectionEntity, AppError>;
    async fn edit_by_id(&self, section: ServiceSectionEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct ServiceSectionServiceImpl {
    repo: Arc<dyn ServiceSectionRepository>,
}

impl ServiceSectionServiceImpl {
    pub fn new(repo: Arc<dyn ServiceSectionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ServiceSectionService for ServiceSectionServiceImpl {
    async fn create(&self, section: ServiceSectionEntity) -> Result<(), AppError> {
        self.repo.create(section).await
    }

    async fn fetch_all(&self) -> Result<Vec<ServiceSectionEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ServiceSectionEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, section: ServiceSectionEntity) -> Result<(), AppError> {
        self.repo.update(section).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
