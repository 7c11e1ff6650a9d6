use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::{
    PortfolioDetailEntity, PortfolioSectionEntity, PortfolioTestimonialEntity,
};
use crate::error::AppError;
use crate::repository::{
    PortfolioDetailRepository, PortfolioSectionRepository, PortfolioTestimonialRepository,
};

#[async_trait]
pub trait PortfolioSectionService: Send + Sync {
    async fn create(&self, section: PortfolioSectionEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PortfolioSectionEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioSectionEntity, AppError>;
    async fn edit_by_id(&self, section: PortfolioSectionEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait PortfolioDetailService: Send + Sync {
    async fn create(&self, detail: PortfolioDetailEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PortfolioDetailEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioDetailEntity, AppError>;
    async fn edit_by_id(&self, detail: PortfolioDetailEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait PortfolioTestimonialService: Send + Sync {
    async fn create(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<PortfolioTestimonialEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioTestimonialEntity, AppError>;
    async fn edit_by_id(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PortfolioSectionServiceImpl {
    repo: Arc<dyn PortfolioSectionRepository>,
}

impl PortfolioSectionServiceImpl {
    pub fn new(repo: Arc<dyn PortfolioSectionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PortfolioSectionService for PortfolioSectionServiceImpl {
    async fn create(&self, section: PortfolioSectionEntity) -> Result<(), AppError> {
        self.repo.create(section).await
    }

    async fn fetch_all(&self) -> Result<Vec<PortfolioSectionEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioSectionEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, section: PortfolioSectionEntity) -> Result<(), AppError> {
        self.repo.update(section).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

/// Details and testimonials hang off a portfolio section; create and edit
/// verify the parent exists before writing, like appointment booking does.
pub struct PortfolioDetailServiceImpl {
    repo: Arc<dyn PortfolioDetailRepository>,
    section_repo: Arc<dyn PortfolioSectionRepository>,
}

impl PortfolioDetailServiceImpl {
    pub fn new(
        repo: Arc<dyn PortfolioDetailRepository>,
        section_repo: Arc<dyn PortfolioSectionRepository>,
    ) -> Self {
        Self { repo, section_repo }
    }
}

#[async_trait]
impl PortfolioDetailService for PortfolioDetailServiceImpl {
    async fn create(&self, detail: PortfolioDetailEntity) -> Result<(), AppError> {
        self.section_repo.fetch_by_id(detail.portfolio_section_id).await?;
        self.repo.create(detail).await
    }

    async fn fetch_all(&self) -> Result<Vec<PortfolioDetailEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioDetailEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, detail: PortfolioDetailEntity) -> Result<(), AppError> {
        self.section_repo.fetch_by_id(detail.portfolio_section_id).await?;
        self.repo.update(detail).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

pub struct PortfolioTestimonialServiceImpl {
    repo: Arc<dyn PortfolioTestimonialRepository>,
    section_repo: Arc<dyn PortfolioSectionRepository>,
}

impl PortfolioTestimonialServiceImpl {
    pub fn new(
        repo: Arc<dyn PortfolioTestimonialRepository>,
        section_repo: Arc<dyn PortfolioSectionRepository>,
    ) -> Self {
        Self { repo, section_repo }
    }
}

#[async_trait]
impl PortfolioTestimonialService for PortfolioTestimonialServiceImpl {
    async fn create(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError> {
        self.section_repo
            .fetch_by_id(testimonial.portfolio_section_id)
            .await?;
        self.repo.create(testimonial).await
    }

    async fn fetch_all(&self) -> Result<Vec<PortfolioTestimonialEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<PortfolioTestimonialEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, testimonial: PortfolioTestimonialEntity) -> Result<(), AppError> {
        self.section_repo
            .fetch_by_id(testimonial.portfolio_section_id)
            .await?;
        self.repo.update(testimonial).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct OneSectionRepo;

    #[async_trait]
    impl PortfolioSectionRepository for OneSectionRepo {
        async fn create(&self, _: PortfolioSectionEntity) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn fetch_all(&self) -> Result<Vec<PortfolioSectionEntity>, AppError> {
            unimplemented!()
        }
        async fn fetch_by_id(&self, id: i64) -> Result<PortfolioSectionEntity, AppError> {
            if id == 1 {
                Ok(PortfolioSectionEntity {
                    id: 1,
                    name: "Website Desa".to_string(),
                    tagline: "t".to_string(),
                    thumbnail: "x".to_string(),
                })
            } else {
                Err(AppError::NotFound("portfolio section"))
            }
        }
        async fn update(&self, _: PortfolioSectionEntity) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn soft_delete(&self, _: i64) -> Result<(), AppError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MemDetailRepo {
        rows: Mutex<Vec<PortfolioDetailEntity>>,
    }

    #[async_trait]
    impl PortfolioDetailRepository for MemDetailRepo {
        async fn create(&self, mut detail: PortfolioDetailEntity) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            detail.id = rows.len() as i64 + 1;
            rows.push(detail);
            Ok(())
        }

        async fn fetch_all(&self) -> Result<Vec<PortfolioDetailEntity>, AppError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn fetch_by_id(&self, id: i64) -> Result<PortfolioDetailEntity, AppError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .ok_or(AppError::NotFound("portfolio detail"))
        }

        async fn update(&self, detail: PortfolioDetailEntity) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|d| d.id == detail.id)
                .ok_or(AppError::NotFound("portfolio detail"))?;
            *slot = detail;
            Ok(())
        }

        async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let idx = rows
                .iter()
                .position(|d| d.id == id)
                .ok_or(AppError::NotFound("portfolio detail"))?;
            rows.remove(idx);
            Ok(())
        }
    }

    fn detail(section_id: i64) -> PortfolioDetailEntity {
        PortfolioDetailEntity {
            id: 0,
            portfolio_section_id: section_id,
            category: "web".to_string(),
            client_name: "Desa Dangdang".to_string(),
            project_date: "Januari 2024".to_string(),
            project_url: "https://example.com".to_string(),
            title: "Situs profil".to_string(),
            description: "d".to_string(),
        }
    }

    #[tokio::test]
    async fn detail_create_rejects_unknown_section_before_write() {
        let repo = Arc::new(MemDetailRepo::default());
        let service = PortfolioDetailServiceImpl::new(repo.clone(), Arc::new(OneSectionRepo));

        let err = service.create(detail(42)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn detail_create_under_existing_section_succeeds() {
        let service = PortfolioDetailServiceImpl::new(
            Arc::new(MemDetailRepo::default()),
            Arc::new(OneSectionRepo),
        );

        service.create(detail(1)).await.unwrap();
        assert_eq!(service.fetch_all().await.unwrap().len(), 1);
    }
}
