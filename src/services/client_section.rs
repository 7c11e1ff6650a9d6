use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::ClientSectionEntity;
use crate::error::AppError;
use crate::repository::ClientSectionRepository;

#[async_trait]
pub trait ClientSectionService: Send + Sync {
    async fn create(&self, section: ClientSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ClientSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ClientSectionEntity, AppError>;
    async fn edit_by_id(&self, section: ClientSectionEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct ClientSectionServiceImpl {
    repo: Arc<dyn ClientSectionRepository>,
}

impl ClientSectionServiceImpl {
    pub fn new(repo: Arc<dyn ClientSectionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ClientSectionService for ClientSectionServiceImpl {
    async fn create(&self, section: ClientSectionEntity) -> Result<(), AppError> {
        self.repo.create(section).await
    }

    async fn fetch_all(&self) -> Result<Vec<ClientSectionEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ClientSectionEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, section: ClientSectionEntity) -> Result<(), AppError> {
        self.repo.update(section).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
