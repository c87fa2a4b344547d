use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// Which per-day metric the report engine derives from the raw punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportType {
    /// Minutes arrived after the window's start hour (clamped at 0).
    Lateness,
    /// Minutes left before the window's end hour (clamped at 0).
    Earlyness,
    /// Minutes between the end of the first in/out interval and the start
    /// of the second one.
    PauseTimes,
    /// Total minutes covered by paired in/out intervals.
    Presence,
}

impl ReportType {
    pub fn rt_from_str(s: &str) -> AppResult<Self> {
        match s {
            "lateness" => Ok(Self::Lateness),
            "earlyness" => Ok(Self::Earlyness),
            "pause_times" => Ok(Self::PauseTimes),
            "presence" => Ok(Self::Presence),
            other => Err(AppError::InvalidReportType(other.to_string())),
        }
    }

    pub fn rt_as_str(&self) -> &'static str {
        match self {
            Self::Lateness => "lateness",
            Self::Earlyness => "earlyness",
            Self::PauseTimes => "pause_times",
            Self::Presence => "presence",
        }
    }
}

/// One derived value for one local day. The meaning of `minutes` depends on
/// the report type that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetric {
    pub day: NaiveDate,
    pub minutes: i64,
}

/// Team-wide average for one day, in hours (2-decimal rounded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDailyAverage {
    pub day: NaiveDate,
    pub hours: f64,
}

/// Team-wide total for one ISO week, in hours (2-decimal rounded).
/// The label follows ISO-8601: "2024-W01".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyAggregate {
    pub week: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamAverages {
    pub daily: Vec<TeamDailyAverage>,
    pub weekly: Vec<WeeklyAggregate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Late,
    Early,
    OnTime,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Late => "late",
            Self::Early => "early",
            Self::OnTime => "on_time",
            Self::Absent => "absent",
        }
    }
}

/// Single-day attendance verdict derived from the first punch of the day.
#[derive(Debug, Clone, Serialize)]
pub struct DelayStatus {
    pub status: AttendanceStatus,
    pub delay_minutes: i64,
}
