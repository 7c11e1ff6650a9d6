use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::AppointmentEntity;
use crate::error::AppError;
use crate::notify::AppointmentMailer;
use crate::repository::{AppointmentRepository, ServiceSectionRepository};

#[async_trait]
pub trait AppointmentService: Send + Sync {
    async fn create(&self, appointment: AppointmentEntity) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<AppointmentEntity>, AppError>;
    async fn fetch_by_id(&self, id: i64) -> Result<AppointmentEntity, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct AppointmentServiceImpl {
    repo: Arc<dyn AppointmentRepository>,
    service_section_repo: Arc<dyn ServiceSectionRepository>,
    mailer: Arc<dyn AppointmentMailer>,
}

impl AppointmentServiceImpl {
    pub fn new(
        repo: Arc<dyn AppointmentRepository>,
        service_section_repo: Arc<dyn ServiceSectionRepository>,
        mailer: Arc<dyn AppointmentMailer>,
    ) -> Self {
        Self {
            repo,
            service_section_repo,
            mailer,
        }
    }
}

#[async_trait]
impl AppointmentService for AppointmentServiceImpl {
    async fn create(&self, appointment: AppointmentEntity) -> Result<(), AppError> {
        // The booked service must exist before anything is written.
        self.service_section_repo
            .fetch_by_id(appointment.service_id)
            .await?;

        let name = appointment.name.clone();
        let recipient = self.repo.create(appointment).await?;

        // Confirmation mail is fire-and-forget; the booking stands even if
        // delivery fails.
        if let Err(e) = self.mailer.send_confirmation(&recipient, &name).await {
            tracing::error!("[SERVICE] appointment confirmation mail failed: {}", e);
        }
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<AppointmentEntity>, AppError> {
        self.repo.fetch_all().await
    }

    async fn fetch_by_id(&self, id: i64) -> Result<AppointmentEntity, AppError> {
        self.repo.fetch_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.repo.soft_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::ServiceSectionEntity;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemAppointmentRepo {
        rows: Mutex<Vec<AppointmentEntity>>,
    }

    #[async_trait]
    impl AppointmentRepository for MemAppointmentRepo {
        async fn create(&self, mut appointment: AppointmentEntity) -> Result<String, AppError> {
            let mut rows = self.rows.lock().unwrap();
            appointment.id = rows.len() as i64 + 1;
            let email = appointment.email.clone();
            rows.push(appointment);
            Ok(email)
        }

        async fn fetch_all(&self) -> Result<Vec<AppointmentEntity>, AppError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn fetch_by_id(&self, id: i64) -> Result<AppointmentEntity, AppError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or(AppError::NotFound("appointment"))
        }

        async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
            let mut rows = self.rows.lock().unwrap();
            let idx = rows
                .iter()
                .position(|a| a.id == id)
                .ok_or(AppError::NotFound("appointment"))?;
            rows.remove(idx);
            Ok(())
        }
    }

    struct OneServiceRepo;

    #[async_trait]
    impl ServiceSectionRepository for OneServiceRepo {
        async fn create(&self, _: ServiceSectionEntity) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn fetch_all(&self) -> Result<Vec<ServiceSectionEntity>, AppError> {
            unimplemented!()
        }
        async fn fetch_by_id(&self, id: i64) -> Result<ServiceSectionEntity, AppError> {
            if id == 1 {
                Ok(ServiceSectionEntity {
                    id: 1,
                    name: "Web Development".to_string(),
                    tagline: "t".to_string(),
                    path_icon: "i".to_string(),
                })
            } else {
                Err(AppError::NotFound("service section"))
            }
        }
        async fn update(&self, _: ServiceSectionEntity) -> Result<(), AppError> {
            unimplemented!()
        }
        async fn soft_delete(&self, _: i64) -> Result<(), AppError> {
            unimplemented!()
        }
    }

    struct CountingMailer {
        sent: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AppointmentMailer for CountingMailer {
        async fn send_confirmation(&self, _recipient: &str, _name: &str) -> anyhow::Result<()> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("smtp unreachable")
            }
            Ok(())
        }
    }

    fn booking(service_id: i64) -> AppointmentEntity {
        AppointmentEntity {
            id: 0,
            service_id,
            service_name: String::new(),
            name: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            phone_number: "0812".to_string(),
            brief: "village website".to_string(),
            budget: 500,
            meet_at: chrono::NaiveDate::from_ymd_opt(2024, 2, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn create_sends_confirmation_to_stored_email() {
        let mailer = Arc::new(CountingMailer { sent: AtomicUsize::new(0), fail: false });
        let service = AppointmentServiceImpl::new(
            Arc::new(MemAppointmentRepo::default()),
            Arc::new(OneServiceRepo),
            mailer.clone(),
        );

        service.create(booking(1)).await.unwrap();
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_rejects_unknown_service_before_write() {
        let repo = Arc::new(MemAppointmentRepo::default());
        let mailer = Arc::new(CountingMailer { sent: AtomicUsize::new(0), fail: false });
        let service =
            AppointmentServiceImpl::new(repo.clone(), Arc::new(OneServiceRepo), mailer.clone());

        let err = service.create(booking(99)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(service.fetch_all().await.unwrap().is_empty());
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mail_failure_does_not_fail_the_booking() {
        let mailer = Arc::new(CountingMailer { sent: AtomicUsize::new(0), fail: true });
        let service = AppointmentServiceImpl::new(
            Arc::new(MemAppointmentRepo::default()),
            Arc::new(OneServiceRepo),
            mailer,
        );

        service.create(booking(1)).await.unwrap();
        assert_eq!(service.fetch_all().await.unwrap().len(), 1);
    }
}
