//! Timezone conversion: UTC instants ↔ wall-clock time in a named IANA zone.
//!
//! Everything downstream (bucketing, lateness, status) reasons in local time,
//! so DST correctness lives here and nowhere else.

use crate::errors::{AppError, AppResult};
use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Fallback zone used when neither the config nor the caller names one.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Resolve an IANA identifier ("Europe/Paris", "America/New_York", ...).
pub fn parse_tz(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

/// Map a UTC instant to wall-clock time in `tz` (DST-correct for that instant).
pub fn to_local(at: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    at.with_timezone(&tz)
}

/// Inverse of [`to_local`]: interpret a naive wall-clock time in `tz`.
///
/// Ambiguous local times (DST fall-back hour) resolve to the earliest offset;
/// nonexistent local times (spring-forward gap) are rejected.
pub fn to_utc(local: NaiveDateTime, tz: Tz) -> AppResult<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidDate(format!(
            "{local} does not exist in {tz} (DST gap)"
        ))),
    }
}

/// Decimal local time-of-day: hours + minutes/60 + seconds/3600.
pub fn local_hour(at: DateTime<Utc>, tz: Tz) -> f64 {
    let l = to_local(at, tz);
    f64::from(l.hour()) + f64::from(l.minute()) / 60.0 + f64::from(l.second()) / 3600.0
}

/// RFC 3339 with millisecond precision and the explicit numeric offset that
/// `tz` applies at that instant, e.g. `2025-07-01T14:34:56.789+02:00`.
pub fn format_with_offset(at: DateTime<Utc>, tz: Tz) -> String {
    to_local(at, tz).to_rfc3339_opts(SecondsFormat::Millis, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap()
    }

    #[test]
    fn unknown_zone_is_rejected() {
        assert!(matches!(
            parse_tz("Mars/Olympus_Mons"),
            Err(AppError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn paris_summer_is_utc_plus_two() {
        let tz = parse_tz("Europe/Paris").unwrap();
        assert_eq!(local_hour(utc(2025, 7, 1, 12, 0, 0), tz), 14.0);
    }

    #[test]
    fn new_york_summer_is_utc_minus_four() {
        let tz = parse_tz("America/New_York").unwrap();
        assert_eq!(local_hour(utc(2025, 7, 1, 12, 0, 0), tz), 8.0);
    }

    #[test]
    fn local_hour_carries_sub_minute_precision() {
        let tz = parse_tz("UTC").unwrap();
        let h = local_hour(utc(2024, 1, 2, 9, 30, 36), tz);
        assert!((h - (9.0 + 30.0 / 60.0 + 36.0 / 3600.0)).abs() < 1e-9);
    }

    #[test]
    fn round_trip_through_local() {
        let tz = parse_tz("Europe/Paris").unwrap();
        // One winter and one summer instant, both far from DST transitions.
        for at in [utc(2025, 1, 15, 8, 34, 56), utc(2025, 7, 1, 12, 34, 56)] {
            let local = to_local(at, tz).naive_local();
            assert_eq!(to_utc(local, tz).unwrap(), at);
        }
    }

    #[test]
    fn dst_gap_is_rejected() {
        // 2025-03-30 02:30 never happened in Paris (clocks jumped 02:00 → 03:00).
        let tz = parse_tz("Europe/Paris").unwrap();
        let ghost = NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert!(to_utc(ghost, tz).is_err());
    }

    #[test]
    fn format_includes_dst_offset() {
        let tz = parse_tz("Europe/Paris").unwrap();
        let s = format_with_offset(utc(2025, 7, 1, 12, 34, 56), tz);
        assert_eq!(s, "2025-07-01T14:34:56.000+02:00");
    }
}
