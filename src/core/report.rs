//! The per-day metric formulas, one per report type.
//!
//! All minute values are rounded half-away-from-zero (`f64::round`), and the
//! hour→minute conversion happens after the hour-level subtraction so a
//! single rounding step applies per metric.

use crate::core::bucket::{DayBucket, bucket_events};
use crate::core::tz::local_hour;
use crate::models::clock_event::ClockEvent;
use crate::models::report::{DailyMetric, ReportType};
use crate::models::work_window::WorkWindow;
use chrono_tz::Tz;

/// Derive one metric per local day from raw punches.
///
/// Days without events produce no entry at all (not a zero). Output is
/// ordered by day ascending.
pub fn compute_report(
    events: &[ClockEvent],
    window: &WorkWindow,
    report_type: ReportType,
    tz: Tz,
) -> Vec<DailyMetric> {
    let mut out = Vec::new();

    for bucket in bucket_events(events, tz) {
        let value = match report_type {
            ReportType::Lateness => lateness(&bucket, window, tz),
            ReportType::Earlyness => earlyness(&bucket, window, tz),
            ReportType::PauseTimes => pause(&bucket),
            ReportType::Presence => presence(&bucket),
        };

        if let Some(minutes) = value {
            out.push(DailyMetric {
                day: bucket.day,
                minutes,
            });
        }
    }

    out
}

/// Minutes arrived after the window start, clamped at zero. Early arrivals
/// emit 0, never a negative value.
fn lateness(bucket: &DayBucket, window: &WorkWindow, tz: Tz) -> Option<i64> {
    let first = bucket.first_event()?;
    let delay_hours = local_hour(first.at, tz) - window.start_hour;
    Some(((delay_hours * 60.0).round() as i64).max(0))
}

/// Minutes left before the window end, clamped at zero.
///
/// Measured on the departure side: the day's last punch against `end_hour`.
/// On a single-punch day that punch doubles as the departure candidate, the
/// same way it doubles as the arrival for lateness.
fn earlyness(bucket: &DayBucket, window: &WorkWindow, tz: Tz) -> Option<i64> {
    let last = bucket.last_event()?;
    let early_hours = window.end_hour - local_hour(last.at, tz);
    Some(((early_hours * 60.0).round() as i64).max(0))
}

/// Gap between the end of the first interval and the start of the second:
/// event[2] − event[1]. Days with fewer than two full pairs have no pause.
fn pause(bucket: &DayBucket) -> Option<i64> {
    if bucket.events.len() < 4 {
        return None;
    }
    let secs = (bucket.events[2].at - bucket.events[1].at).num_seconds();
    Some((secs as f64 / 60.0).round() as i64)
}

/// Total minutes covered by the day's paired intervals. Seconds are summed
/// across intervals first and rounded once, so sub-minute fragments do not
/// compound.
fn presence(bucket: &DayBucket) -> Option<i64> {
    let intervals = bucket.intervals();
    if intervals.is_empty() {
        return None;
    }
    let secs: i64 = intervals.iter().map(|iv| iv.seconds()).sum();
    Some((secs as f64 / 60.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tz::parse_tz;
    use chrono::NaiveDateTime;

    fn ev(ts: &str) -> ClockEvent {
        let at = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M")
            .unwrap()
            .and_utc();
        ClockEvent::new(1, at, None)
    }

    fn ev_s(ts: &str) -> ClockEvent {
        let at = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc();
        ClockEvent::new(1, at, None)
    }

    fn utc() -> Tz {
        parse_tz("UTC").unwrap()
    }

    #[test]
    fn lateness_one_hour_after_nine() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let metrics = compute_report(
            &[ev("2024-01-02 10:00")],
            &window,
            ReportType::Lateness,
            utc(),
        );

        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].day.to_string(), "2024-01-02");
        assert_eq!(metrics[0].minutes, 60);
    }

    #[test]
    fn lateness_never_negative() {
        // Arrival one hour before the window start clamps to 0.
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let metrics = compute_report(
            &[ev("2024-01-02 08:00")],
            &window,
            ReportType::Lateness,
            utc(),
        );
        assert_eq!(metrics[0].minutes, 0);
    }

    #[test]
    fn earlyness_against_end_hour() {
        // Last punch at 07:00 with end_hour 9 → left 120 minutes early.
        let window = WorkWindow::new(6.0, 9.0).unwrap();
        let metrics = compute_report(
            &[ev("2024-01-02 07:00")],
            &window,
            ReportType::Earlyness,
            utc(),
        );

        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].minutes, 120);
    }

    #[test]
    fn pause_between_first_and_second_interval() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let events = vec![
            ev("2024-01-02 09:00"),
            ev("2024-01-02 10:00"),
            ev("2024-01-02 12:00"),
            ev("2024-01-02 13:00"),
        ];

        let metrics = compute_report(&events, &window, ReportType::PauseTimes, utc());
        assert_eq!(metrics[0].minutes, 120);
    }

    #[test]
    fn pause_needs_two_full_pairs() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let events = vec![
            ev("2024-01-02 09:00"),
            ev("2024-01-02 10:00"),
            ev("2024-01-02 12:00"),
        ];

        let metrics = compute_report(&events, &window, ReportType::PauseTimes, utc());
        assert!(metrics.is_empty());
    }

    #[test]
    fn presence_sums_paired_intervals() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let metrics = compute_report(
            &[ev("2024-01-02 09:00"), ev("2024-01-02 11:00")],
            &window,
            ReportType::Presence,
            utc(),
        );
        assert_eq!(metrics[0].minutes, 120);
    }

    #[test]
    fn presence_grows_with_an_extra_pair() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let one_pair = vec![ev("2024-01-02 09:00"), ev("2024-01-02 11:00")];
        let two_pairs = vec![
            ev("2024-01-02 09:00"),
            ev("2024-01-02 11:00"),
            ev("2024-01-02 13:00"),
            ev("2024-01-02 15:30"),
        ];

        let a = compute_report(&one_pair, &window, ReportType::Presence, utc());
        let b = compute_report(&two_pairs, &window, ReportType::Presence, utc());
        assert!(b[0].minutes >= a[0].minutes);
        assert_eq!(b[0].minutes, 270);
    }

    #[test]
    fn presence_rounds_once_across_intervals() {
        // Two 90-second intervals: 180 s total is 3 minutes. Rounding each
        // interval separately would yield 2 + 2 = 4.
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let events = vec![
            ev_s("2024-01-02 09:00:00"),
            ev_s("2024-01-02 09:01:30"),
            ev_s("2024-01-02 10:00:00"),
            ev_s("2024-01-02 10:01:30"),
        ];

        let metrics = compute_report(&events, &window, ReportType::Presence, utc());
        assert_eq!(metrics[0].minutes, 3);
    }

    #[test]
    fn single_event_day_emits_no_presence() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let metrics = compute_report(
            &[ev("2024-01-02 09:00")],
            &window,
            ReportType::Presence,
            utc(),
        );
        assert!(metrics.is_empty());
    }

    #[test]
    fn lateness_in_paris_uses_local_clock() {
        // 08:30 UTC on a July day is 10:30 in Paris: 90 minutes after 09:00.
        let tz = parse_tz("Europe/Paris").unwrap();
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let metrics = compute_report(&[ev("2025-07-01 08:30")], &window, ReportType::Lateness, tz);
        assert_eq!(metrics[0].minutes, 90);
    }
}
