// HTTP handlers: bind, gate, validate, orchestrate, shape.
//
// Every admin route tree mounts the token middleware; handlers still check
// the resolved principal before any validation or storage work.
pub mod about_company;
pub mod appointment;
pub mod auth;
pub mod client_section;
pub mod contact_us;
pub mod faq_section;
pub mod health;
pub mod hero_section;
pub mod our_team;
pub mod portfolio;
pub mod post;
pub mod profile;
pub mod service_detail;
pub mod service_section;
pub mod statistic;

use crate::error::AppError;

/// Route ids arrive as path strings; malformed ids are a validation failure,
/// not a lookup miss.
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("invalid id '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("4.2").is_err());
    }
}
