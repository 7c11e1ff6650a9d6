// Deterministic timestamp formats at the transport boundary
use chrono::NaiveDateTime;

use crate::error::AppError;

/// Inbound date-like fields are accepted in exactly this shape.
pub const REQUEST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Outbound timestamps render in this fixed display shape,
/// e.g. "15 Jan 2024 00:00:00".
pub const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Parse a `YYYY-MM-DD` request field into a midnight timestamp.
pub fn parse_request_date(field: &str, value: &str) -> Result<NaiveDateTime, AppError> {
    let date = chrono::NaiveDate::parse_from_str(value, REQUEST_DATE_FORMAT)
        .map_err(|_| AppError::validation(format!("{} must be formatted as YYYY-MM-DD", field)))?;
    Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

pub fn display_timestamp(ts: NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_dates_at_midnight() {
        let ts = parse_request_date("published_at", "2024-01-15").unwrap();
        assert_eq!(display_timestamp(ts), "15 Jan 2024 00:00:00");
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = parse_request_date("published_at", "15-01-2024").unwrap_err();
        assert!(err.message().contains("published_at"));

        assert!(parse_request_date("meet_at", "2024-13-40").is_err());
        assert!(parse_request_date("meet_at", "").is_err());
    }

    #[test]
    fn display_format_is_stable() {
        let ts = chrono::NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(display_timestamp(ts), "31 Dec 2023 23:59:59");
    }
}
