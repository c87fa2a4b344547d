//! Team-level aggregation of per-member daily metrics.
//!
//! Daily averages divide by the full team size, not by how many members
//! actually punched that day: an absent member drags the average down
//! instead of silently disappearing from the denominator.
//!
//! Weeks follow ISO-8601 (`iso_week()`), labelled `YYYY-Www`.

use crate::models::report::{DailyMetric, TeamDailyAverage, WeeklyAggregate};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// ISO week label for a date, e.g. "2024-W01".
pub fn iso_week_label(day: NaiveDate) -> String {
    let iso = day.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Average each day's minutes across the team, in hours.
///
/// `team_size` is the fixed denominator; it must be the team's full member
/// count, never the count of members who reported.
pub fn aggregate_daily(per_member: &[Vec<DailyMetric>], team_size: usize) -> Vec<TeamDailyAverage> {
    if team_size == 0 {
        return Vec::new();
    }

    let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for member in per_member {
        for metric in member {
            *totals.entry(metric.day).or_insert(0) += metric.minutes;
        }
    }

    totals
        .into_iter()
        .map(|(day, minutes)| TeamDailyAverage {
            day,
            hours: round2(minutes as f64 / 60.0 / team_size as f64),
        })
        .collect()
}

/// Sum daily hours into ISO weeks, ordered by week label ascending.
pub fn aggregate_weekly(daily: &[TeamDailyAverage]) -> Vec<WeeklyAggregate> {
    let mut weeks: BTreeMap<String, f64> = BTreeMap::new();
    for d in daily {
        *weeks.entry(iso_week_label(d.day)).or_insert(0.0) += d.hours;
    }

    weeks
        .into_iter()
        .map(|(week, hours)| WeeklyAggregate {
            week,
            hours: round2(hours),
        })
        .collect()
}
