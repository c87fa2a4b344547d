//! Time utilities: timestamp parsing, minute formatting.

use crate::core::tz::to_utc;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Parse a punch timestamp from the CLI.
///
/// Accepts RFC 3339 with an explicit offset (`2024-01-02T10:00:00Z`) or a
/// naive `YYYY-MM-DD HH:MM[:SS]` wall-clock time interpreted in `tz`.
pub fn parse_timestamp(s: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return to_utc(naive, tz);
        }
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

/// `125` → `"+02:05"`, `-15` → `"-00:15"`, `0` → `"00:00"`.
pub fn format_minutes(mins: i64, want_sign: bool) -> String {
    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tz::parse_tz;

    #[test]
    fn parses_rfc3339_and_naive_local() {
        let tz = parse_tz("Europe/Paris").unwrap();
        let a = parse_timestamp("2025-07-01T14:00:00+02:00", tz).unwrap();
        let b = parse_timestamp("2025-07-01 14:00", tz).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rfc3339(), "2025-07-01T12:00:00+00:00");
    }

    #[test]
    fn rejects_nonsense() {
        let tz = parse_tz("UTC").unwrap();
        assert!(parse_timestamp("next tuesday", tz).is_err());
    }

    #[test]
    fn formats_signed_minutes() {
        assert_eq!(format_minutes(125, true), "+02:05");
        assert_eq!(format_minutes(-15, true), "-00:15");
        assert_eq!(format_minutes(0, true), "00:00");
        assert_eq!(format_minutes(90, false), "01:30");
    }
}
