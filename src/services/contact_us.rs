use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::ContactUsEntity;
use crate::error::AppError;
use crate::repository::ContactUsRepository;

#[async_trait]
pub trait ContactUsService: Send + Sync {
    async fn create(&self, contact: ContactUsEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ContactUsEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ContactUsEntity, AppError>;
    async fn edit_by_id(&self, contact: ContactUsEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct ContactUsServiceImpl {
    repo: Arc<dyn ContactUsRepository>,
}

impl ContactUsServiceImpl {
    pub fn new(repo: Arc<dyn ContactUsRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContactUsService for ContactUsServiceImpl {
    async fn create(&self, contact: ContactUsEntity) -> Result<(), AppError> {
        self.repo.create(contact).await
    }

    async fn fetch_all(&self) -> Result<Vec<ContactUsEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ContactUsEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, contact: ContactUsEntity) -> Result<(), AppError> {
        self.repo.update(contact).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
