use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notify;
pub mod repository;
pub mod services;

use notify::LogMailer;
use repository::{
    PgAboutCompanyKeynoteRepository, PgAboutCompanyRepository, PgAppointmentRepository,
    PgClientSectionRepository, PgContactUsRepository, PgFaqSectionRepository,
    PgHeroSectionRepository, PgOurTeamRepository, PgPortfolioDetailRepository,
    PgPortfolioSectionRepository, PgPortfolioTestimonialRepository, PgPostRepository,
    PgProfileRepository, PgServiceDetailRepository, PgServiceSectionRepository,
    PgStatisticRepository, PgUserRepository,
};
use services::{
    AboutCompanyKeynoteService, AboutCompanyKeynoteServiceImpl, AboutCompanyService,
    AboutCompanyServiceImpl, AppointmentService, AppointmentServiceImpl, AuthService,
    AuthServiceImpl, ClientSectionService, ClientSectionServiceImpl, ContactUsService,
    ContactUsServiceImpl, FaqSectionService, FaqSectionServiceImpl, HeroSectionService,
    HeroSectionServiceImpl, OurTeamService, OurTeamServiceImpl, PortfolioDetailService,
    PortfolioDetailServiceImpl, PortfolioSectionService, PortfolioSectionServiceImpl,
    PortfolioTestimonialService, PortfolioTestimonialServiceImpl, PostService, PostServiceImpl,
    ProfileService, ProfileServiceImpl, ServiceDetailService, ServiceDetailServiceImpl,
    ServiceSectionService, ServiceSectionServiceImpl, StatisticService, StatisticServiceImpl,
};

/// Shared handler state. Services are trait objects so tests can swap
/// implementations without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub post_service: Arc<dyn PostService>,
    pub statistic_service: Arc<dyn StatisticService>,
    pub client_section_service: Arc<dyn ClientSectionService>,
    pub contact_us_service: Arc<dyn ContactUsService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub service_section_service: Arc<dyn ServiceSectionService>,
    pub service_detail_service: Arc<dyn ServiceDetailService>,
    pub hero_section_service: Arc<dyn HeroSectionService>,
    pub about_company_service: Arc<dyn AboutCompanyService>,
    pub about_company_keynote_service: Arc<dyn AboutCompanyKeynoteService>,
    pub faq_section_service: Arc<dyn FaqSectionService>,
    pub our_team_service: Arc<dyn OurTeamService>,
    pub portfolio_section_service: Arc<dyn PortfolioSectionService>,
    pub portfolio_detail_service: Arc<dyn PortfolioDetailService>,
    pub portfolio_testimonial_service: Arc<dyn PortfolioTestimonialService>,
    pub appointment_service: Arc<dyn AppointmentService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Wires the Postgres repositories and default collaborators onto a pool.
    pub fn from_pool(pool: PgPool) -> Self {
        let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
        let statistic_repo = Arc::new(PgStatisticRepository::new(pool.clone()));
        let client_section_repo = Arc::new(PgClientSectionRepository::new(pool.clone()));
        let contact_us_repo = Arc::new(PgContactUsRepository::new(pool.clone()));
        let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
        let service_section_repo = Arc::new(PgServiceSectionRepository::new(pool.clone()));
        let service_detail_repo = Arc::new(PgServiceDetailRepository::new(pool.clone()));
        let hero_section_repo = Arc::new(PgHeroSectionRepository::new(pool.clone()));
        let about_company_repo = Arc::new(PgAboutCompanyRepository::new(pool.clone()));
        let keynote_repo = Arc::new(PgAboutCompanyKeynoteRepository::new(pool.clone()));
        let faq_section_repo = Arc::new(PgFaqSectionRepository::new(pool.clone()));
        let our_team_repo = Arc::new(PgOurTeamRepository::new(pool.clone()));
        let portfolio_section_repo = Arc::new(PgPortfolioSectionRepository::new(pool.clone()));
        let portfolio_detail_repo = Arc::new(PgPortfolioDetailRepository::new(pool.clone()));
        let portfolio_testimonial_repo =
            Arc::new(PgPortfolioTestimonialRepository::new(pool.clone()));
        let appointment_repo = Arc::new(PgAppointmentRepository::new(pool.clone()));
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            pool,
            post_service: Arc::new(PostServiceImpl::new(post_repo)),
            statistic_service: Arc::new(StatisticServiceImpl::new(statistic_repo)),
            client_section_service: Arc::new(ClientSectionServiceImpl::new(client_section_repo)),
            contact_us_service: Arc::new(ContactUsServiceImpl::new(contact_us_repo)),
            profile_service: Arc::new(ProfileServiceImpl::new(profile_repo)),
            service_section_service: Arc::new(ServiceSectionServiceImpl::new(
                service_section_repo.clone(),
            )),
            service_detail_service: Arc::new(ServiceDetailServiceImpl::new(service_detail_repo)),
            hero_section_service: Arc::new(HeroSectionServiceImpl::new(hero_section_repo)),
            about_company_service: Arc::new(AboutCompanyServiceImpl::new(
                about_company_repo.clone(),
            )),
            about_company_keynote_service: Arc::new(AboutCompanyKeynoteServiceImpl::new(
                keynote_repo,
                about_company_repo,
            )),
            faq_section_service: Arc::new(FaqSectionServiceImpl::new(faq_section_repo)),
            our_team_service: Arc::new(OurTeamServiceImpl::new(our_team_repo)),
            portfolio_section_service: Arc::new(PortfolioSectionServiceImpl::new(
                portfolio_section_repo.clone(),
            )),
            portfolio_detail_service: Arc::new(PortfolioDetailServiceImpl::new(
                portfolio_detail_repo,
                portfolio_section_repo.clone(),
            )),
            portfolio_testimonial_service: Arc::new(PortfolioTestimonialServiceImpl::new(
                portfolio_testimonial_repo,
                portfolio_section_repo,
            )),
            appointment_service: Arc::new(AppointmentServiceImpl::new(
                appointment_repo,
                service_section_repo,
                Arc::new(LogMailer),
            )),
            auth_service: Arc::new(AuthServiceImpl::new(user_repo)),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::auth::routes())
        .merge(handlers::post::routes())
        .merge(handlers::statistic::routes())
        .merge(handlers::client_section::routes())
        .merge(handlers::contact_us::routes())
        .merge(handlers::profile::routes())
        .merge(handlers::service_section::routes())
        .merge(handlers::service_detail::routes())
        .merge(handlers::hero_section::routes())
        .merge(handlers::about_company::routes())
        .merge(handlers::faq_section::routes())
        .merge(handlers::our_team::routes())
        .merge(handlers::portfolio::routes())
        .merge(handlers::appointment::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
