use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::FaqSectionEntity;
use crate::error::AppError;
use crate::repository::FaqSectionRepository;

#[async_trait]
pub trait FaqSectionService: Send + Sync {
    async fn create(&self, faq: FaqSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<FaqSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<FaqSectionEntity, AppError>;
    async fn edit_by_id(&self, faq: FaqSectionEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct FaqSectionServiceImpl {
    repo: Arc<dyn FaqSectionRepository>,
}

impl FaqSectionServiceImpl {
    pub fn new(repo: Arc<dyn FaqSectionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FaqSectionService for FaqSectionServiceImpl {
    async fn create(&self, faq: FaqSectionEntity) -> Result<(), AppError> {
        self.repo.create(faq).await
    }

    async fn fetch_all(&self) -> Result<Vec<FaqSectionEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<FaqSectionEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, faq: FaqSectionEntity) -> Result<(), AppError> {
        self.repo.update(faq).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
