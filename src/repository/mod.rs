pub mod about_company;
pub mod appointment;
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
pub mod user;

pub use about_company::{
    AboutCompanyKeynoteRepository, AboutCompanyRepository, PgAboutCompanyKeynoteRepository,
    PgAboutCompanyRepository,
};
pub use appointment::{AppointmentRepository, PgAppointmentRepository};
pub use client_section::{ClientSectionRepository, PgClientSectionRepository};
pub use contact_us::{ContactUsRepository, PgContactUsRepository};
pub use faq_section::{FaqSectionRepository, PgFaqSectionRepository};
pub use hero_section::{HeroSectionRepository, PgHeroSectionRepository};
pub use our_team::{OurTeamRepository, PgOurTeamRepository};
pub use portfolio::{
    PgPortfolioDetailRepository, PgPortfolioSectionRepository, PgPortfolioTestimonialRepository,
    PortfolioDetailRepository, PortfolioSectionRepository, PortfolioTestimonialRepository,
};
pub use post::{PgPostRepository, PostRepository};
pub use profile::{PgProfileRepository, ProfileRepository};
pub use service_detail::{PgServiceDetailRepository, ServiceDetailRepository};
pub use service_section::{PgServiceSectionRepository, ServiceSectionRepository};
pub use statistic::{PgStatisticRepository, StatisticRepository};
pub use user::{PgUserRepository, UserRepository};
