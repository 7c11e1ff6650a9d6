use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::ServiceDetailEntity;
use crate::error::AppError;
use crate::repository::ServiceDetailRepository;

#[async_trait]
pub trait ServiceDetailService: Send + Sync {
    async fn create(&self, detail: ServiceDetailEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<ServiceDetailEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<ServiceDetailEntity, AppError>;
    async fn fetch_by_service_id(&self, service_id: i64) -> Result<ServiceDetailEntity, AppError>;
    async fn edit_by_id(&self, detail: ServiceDetailEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct ServiceDetailServiceImpl {
    repo: Arc<dyn ServiceDetailRepository>,
}

impl ServiceDetailServiceImpl {
    pub fn new(repo: Arc<dyn ServiceDetailRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ServiceDetailService for ServiceDetailServiceImpl {
    async fn create(&self, detail: ServiceDetailEntity) -> Result<(), AppError> {
        self.repo.create(detail).await
    }

    async fn fetch_all(&self) -> Result<Vec<ServiceDetailEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<ServiceDetailEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn fetch_by_service_id(&self, service_id: i64) -> Result<ServiceDetailEntity, AppError> {
        self.repo.fetch_by_service_id(service_id).await
    }

    async fn edit_by_id(&self, detail: ServiceDetailEntity) -> Result<(), AppError> {
        self.repo.update(detail).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
