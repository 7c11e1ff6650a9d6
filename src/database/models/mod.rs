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
