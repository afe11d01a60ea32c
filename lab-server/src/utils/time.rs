//! Business timezone helpers
//!
//! Prep dates follow the shop's wall clock, not the host clock.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse an IANA timezone name such as `Asia/Seoul`
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::config(format!("Invalid timezone: {name}")))
}

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Current Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Asia/Seoul").unwrap(), chrono_tz::Asia::Seoul);
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::ConfigError);
    }
}
