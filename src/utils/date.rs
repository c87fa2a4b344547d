//! Date parsing and period resolution for report/export ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

fn month_start(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))
}

fn next_month(d: NaiveDate) -> AppResult<NaiveDate> {
    if d.month() == 12 {
        month_start(d.year() + 1, 1)
    } else {
        month_start(d.year(), d.month() + 1)
    }
}

/// Half-open `[from, to)` bounds for a single period token:
/// - `YYYY`        → entire year
/// - `YYYY-MM`     → entire month
/// - `YYYY-MM-DD`  → that one day
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d + Duration::days(1)));
    }

    if p.len() == 7
        && let Ok(d) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return Ok((d, next_month(d)?));
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok((month_start(year, 1)?, month_start(year + 1, 1)?));
    }

    Err(AppError::InvalidDate(p.to_string()))
}

/// Resolve a `--period` argument to half-open `[from, to)` bounds.
///
/// Single tokens as in [`period_bounds`]; `start:end` combines the start of
/// the first period with the end of the second (`2025-01:2025-03` → Jan 1 to
/// Apr 1). Defaults to the current month when absent.
pub fn resolve_period(period: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some(p) = period else {
        let t = today();
        let start = month_start(t.year(), t.month())?;
        return Ok((start, next_month(start)?));
    };

    if let Some((a, b)) = p.split_once(':') {
        let (from, _) = period_bounds(a.trim())?;
        let (_, to) = period_bounds(b.trim())?;
        if from >= to {
            return Err(AppError::InvalidDateRange(p.to_string()));
        }
        return Ok((from, to));
    }

    period_bounds(p)
}
