pub mod about_company;
pub mod appointment;
pub mod auth;
pub mod client_section;
pub mod contact_us;
pub mod faq_section;
pub mod hero_section;
pub mod our_team;
pub mod portfolio;
pub mod post;
pub mod profile;
pub mod service_detail;
pub mod service_section;
pub mod statistic;

pub use about_company::{
    AboutCompanyKeynoteService, AboutCompanyKeynoteServiceImpl, AboutCompanyService,
    AboutCompanyServiceImpl,
};
pub use appointment::{AppointmentService, AppointmentServiceImpl};
pub use auth::{AuthService, AuthServiceImpl, LoginToken};
pub use client_section::{ClientSectionService, ClientSectionServiceImpl};
pub use contact_us::{ContactUsService, ContactUsServiceImpl};
pub use faq_section::{FaqSectionService, FaqSectionServiceImpl};
pub use hero_section::{HeroSectionService, HeroSectionServiceImpl};
pub use our_team::{OurTeamService, OurTeamServiceImpl};
pub use portfolio::{
    PortfolioDetailService, PortfolioDetailServiceImpl, PortfolioSectionService,
    PortfolioSectionServiceImpl, PortfolioTestimonialService, PortfolioTestimonialServiceImpl,
};
pub use post::{PostService, PostServiceImpl};
pub use profile::{ProfileService, ProfileServiceImpl};
pub use service_detail::{ServiceDetailService, ServiceDetailServiceImpl};
pub use service_section::{ServiceSectionService, ServiceSectionServiceImpl};
pub use statistic::{StatisticService, StatisticServiceImpl};
