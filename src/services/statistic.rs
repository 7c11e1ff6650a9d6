use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::StatisticEntity;
use crate::error::AppError;
use crate::repository::StatisticRepository;

#[async_trait]
pub trait StatisticService: Send + Sync {
    async fn create(&self, statistic: StatisticEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<StatisticEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<StatisticEntity, AppError>;
    async fn edit_by_id(&self, statistic: StatisticEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct StatisticServiceImpl {
    repo: Arc<dyn StatisticRepository>,
}

impl StatisticServiceImpl {
    pub fn new(repo: Arc<dyn StatisticRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StatisticService for StatisticServiceImpl {
    async fn create(&self, statistic: StatisticEntity) -> Result<(), AppError> {
        self.repo.create(statistic).await
    }

    async fn fetch_all(&self) -> Result<Vec<StatisticEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<StatisticEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, statistic: StatisticEntity) -> Result<(), AppError> {
        self.repo.update(statistic).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
