use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::HeroSectionEntity;
use crate::error::AppError;
use crate::repository::HeroSectionRepository;

#[async_trait]
pub trait HeroSectionService: Send + Sync {
    async fn create(&self, section: HeroSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<HeroSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<HeroSectionEntity, AppError>;
    async fn edit_by_id(&self, section: HeroSectionEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct HeroSectionServiceImpl {
    repo: Arc<dyn HeroSectionRepository>,
}

impl HeroSectionServiceImpl {
    pub fn new(repo: Arc<dyn HeroSectionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl HeroSectionService for HeroSectionServiceImpl {
    async fn create(&self, section: HeroSectionEntity) -> Result<(), AppError> {
        self.repo.create(section).await
    }

    async fn fetch_all(&self) -> Result<Vec<HeroSectionEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<HeroSectionEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, section: HeroSectionEntity) -> Result<(), AppError> {
        self.repo.update(section).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
