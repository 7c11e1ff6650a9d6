use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::{AboutCompanyEntity, AboutCompanyKeynoteEntity};
use crate::error::AppError;
use crate::repository::{AboutCompanyKeynoteRepository, AboutCompanyRepository};

#[async_trait]
pub trait AboutCompanyService: Send + Sync {
    async fn create(&self, company: AboutCompanyEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<AboutCompanyEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyEntity, AppError>;
    async fn edit_by_id(&self, company: AboutCompanyEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait AboutCompanyKeynoteService: Send + Sync {
    async fn create(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyKeynoteEntity, AppError>;
    async fn fetch_by_company_id(
        &self,
        company_id: i64,
    ) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError>;
    async fn edit_by_id(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct AboutCompanyServiceImpl {
    repo: Arc<dyn AboutCompanyRepository>,
}

impl AboutCompanyServiceImpl {
    pub fn new(repo: Arc<dyn AboutCompanyRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AboutCompanyService for AboutCompanyServiceImpl {
    async fn create(&self, company: AboutCompanyEntity) -> Result<(), AppError> {
        self.repo.create(company).await
    }

    async fn fetch_all(&self) -> Result<Vec<AboutCompanyEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn edit_by_id(&self, company: AboutCompanyEntity) -> Result<(), AppError> {
        self.repo.update(company).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

pub struct AboutCompanyKeynoteServiceImpl {
    repo: Arc<dyn AboutCompanyKeynoteRepository>,
    company_repo: Arc<dyn AboutCompanyRepository>,
}

impl AboutCompanyKeynoteServiceImpl {
    pub fn new(
        repo: Arc<dyn AboutCompanyKeynoteRepository>,
        company_repo: Arc<dyn AboutCompanyRepository>,
    ) -> Self {
        Self { repo, company_repo }
    }
}

#[async_trait]
impl AboutCompanyKeynoteService for AboutCompanyKeynoteServiceImpl {
    async fn create(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError> {
        // The owning about-company row must exist before anything is written.
        self.company_repo.fetch_by_id(keynote.about_company_id).await?;
        self.repo.create(keynote).await
    }

    async fn fetch_all(&self) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyKeynoteEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn fetch_by_company_id(
        &self,
        company_id: i64,
    ) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError> {
        self.repo.fetch_by_company_id(company_id).await
    }

    async fn edit_by_id(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError> {
        self.company_repo.fetch_by_id(keynote.about_company_id).await?;
        self.repo.update(keynote).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct OneCompanyRepo;

    #[async_trait]
    impl AboutCompanyRepository for OneCompanyRepo {
        async fn create(&self, _: AboutCompanyEntity) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn fetch_all(&self) -> Result<Vec<AboutCompanyEntity>, AppError> {
            unimplemented!()
        }
        async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyEntity, AppError> {
            if id == 1 {
                Ok(AboutCompanyEntity {
                    id: 1,
                    description: "Profil desa".to_string(),
                    path_image: "/img/about.jpg".to_string(),
                })
            } else {
                Err(AppError::NotFound("about company"))
            }
        }
        async fn update(&self, _: AboutCompanyEntity) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn soft_delete(&self, _: i64) -> Result<(), AppError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MemKeynoteRepo {
        rows: Mutex<Vec<AboutCompanyKeynoteEntity>>,
    }

    #[async_trait]
    impl AboutCompanyKeynoteRepository for MemKeynoteRepo {
        async fn create(&self, mut keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            keynote.id = rows.len() as i64 + 1;
            rows.push(keynote);
            Ok(())
        }

        async fn fetch_all(&self) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn fetch_by_id(&self, id: i64) -> Result<AboutCompanyKeynoteEntity, AppError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|k| k.id == id)
                .cloned()
                .ok_or(AppError::NotFound("keynote"))
        }

        async fn fetch_by_company_id(
            &self,
            company_id: i64,
        ) -> Result<Vec<AboutCompanyKeynoteEntity>, AppError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|k| k.about_company_id == company_id)
                .cloned()
                .collect())
        }

        async fn update(&self, keynote: AboutCompanyKeynoteEntity) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|k| k.id == keynote.id)
                .ok_or(AppError::NotFound("keynote"))?;
            *slot = keynote;
            Ok(())
        }

        async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let idx = rows
                .iter()
                .position(|k| k.id == id)
                .ok_or(AppError::NotFound("keynote"))?;
            rows.remove(idx);
            Ok(())
        }
    }

    fn keynote(company_id: i64) -> AboutCompanyKeynoteEntity {
        AboutCompanyKeynoteEntity {
            id: 0,
            about_company_id: company_id,
            keynote: "Transparan dan akuntabel".to_string(),
            path_image: "/img/keynote.svg".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_company_before_write() {
        let repo = Arc::new(MemKeynoteRepo::default());
        let service = AboutCompanyKeynoteServiceImpl::new(repo.clone(), Arc::new(OneCompanyRepo));

        let err = service.create(keynote(99)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_under_existing_company_succeeds() {
        let service = AboutCompanyKeynoteServiceImpl::new(
            Arc::new(MemKeynoteRepo::default()),
            Arc::new(OneCompanyRepo),
        );

        service.create(keynote(1)).await.unwrap();
        let stored = service.fetch_by_company_id(1).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].about_company_id, 1);
    }

    #[tokio::test]
    async fn edit_revalidates_the_parent() {
        let repo = Arc::new(MemKeynoteRepo::default());
        let service = AboutCompanyKeynoteServiceImpl::new(repo, Arc::new(OneCompanyRepo));

        service.create(keynote(1)).await.unwrap();
        let mut moved = service.fetch_by_id(1).await.unwrap();
        moved.about_company_id = 99;

        let err = service.edit_by_id(moved).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
