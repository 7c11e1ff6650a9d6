// Domain entities passed between handlers, services and repositories.
// Request-scoped copies only; the persistence layer owns the stored rows.
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct PostEntity {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub featured_image: String,
    pub content: String,
    pub published_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticEntity {
    pub id: i64,
    pub name: String,
    pub total: i64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSectionEntity {
    pub id: i64,
    pub name: String,
    pub path_icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactUsEntity {
    pub id: i64,
    pub company_name: String,
    pub location_name: String,
    pub address: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEntity {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSectionEntity {
    pub id: i64,
    pub name: String,
    pub tagline: String,
    pub path_icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentEntity {
    pub id: i64,
    pub service_id: i64,
    /// Joined from the owning service section on reads; empty on writes.
    pub service_name: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub brief: String,
    pub budget: i64,
    pub meet_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSectionEntity {
    pub id: i64,
    pub heading: String,
    pub sub_heading: String,
    pub path_video: String,
    pub banner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutCompanyEntity {
    pub id: i64,
    pub description: String,
    pub path_image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutCompanyKeynoteEntity {
    pub id: i64,
    pub about_company_id: i64,
    pub keynote: String,
    pub path_image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqSectionEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OurTeamEntity {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub path_photo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSectionEntity {
    pub id: i64,
    pub name: String,
    pub tagline: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDetailEntity {
    pub id: i64,
    pub portfolio_section_id: i64,
    pub category: String,
    pub client_name: String,
    pub project_date: String,
    pub project_url: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioTestimonialEntity {
    pub id: i64,
    pub portfolio_section_id: i64,
    pub thumbnail: String,
    pub message: String,
    pub client_name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDetailEntity {
    pub id: i64,
    pub service_id: i64,
    pub path_image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC-format hash, never the plaintext.
    pub password: String,
}
