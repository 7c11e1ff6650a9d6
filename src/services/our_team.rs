use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::OurTeamEntity;
use crate::error::AppError;
use crate::repository::OurTeamRepository;

#[async_trait]
pub trait OurTeamService: Send + Sync {
    async fn create(&self, member: OurTeamEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<OurTeamEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<OurTeamEntity, AppError>;
    async fn edit_by_id(&self, member: OurTeamEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct OurTeamServiceImpl {
    repo: Arc<dyn OurTeamRepository>,
}

impl OurTeamServiceImpl {
    pub fn new(repo: Arc<dyn OurTeamRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl OurTeamService for OurTeamServiceImpl {
    async fn create(&self, member: OurTeamEntity) -> Result<(), AppError> {
        self.repo.create(member).await
    }

    async fn fetch_all(&self) -> Result<Vec<OurTeamEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<OurTeamEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, member: OurTeamEntity) -> Result<(), AppError> {
        self.repo.update(member).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}
