//! High-level reporting facade over a [`ClockEventStore`].
//!
//! Stateless: every call is a pure function of the store contents plus its
//! arguments, so concurrent report requests need no coordination.

use crate::core::aggregate::{aggregate_daily, aggregate_weekly};
use crate::core::report::compute_report;
use crate::core::status::delay_status;
use crate::core::store::ClockEventStore;
use crate::core::tz::to_utc;
use crate::errors::{AppError, AppResult};
use crate::models::report::{DailyMetric, DelayStatus, ReportType, TeamAverages};
use crate::models::work_window::WorkWindow;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

pub struct ReportEngine<'a, S: ClockEventStore> {
    store: &'a S,
    tz: Tz,
}

impl<'a, S: ClockEventStore> ReportEngine<'a, S> {
    pub fn new(store: &'a S, tz: Tz) -> Self {
        Self { store, tz }
    }

    /// Per-day metrics for one user over `[from, to)` local days.
    pub fn compute_report(
        &self,
        user_id: i64,
        report_type: ReportType,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyMetric>> {
        let window = self.window_for_user(user_id)?;
        let (start, end) = self.utc_range(from, to)?;

        let events = self.store.events_for_user(user_id, start, end)?;
        Ok(compute_report(&events, &window, report_type, self.tz))
    }

    /// Presence averaged across a team: hours per day and per ISO week.
    ///
    /// One store query per member; members contribute independently and the
    /// result ordering is imposed afterwards by the day/week key sort.
    pub fn compute_team_averages(
        &self,
        team_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<TeamAverages> {
        let window = self
            .store
            .work_window(team_id)?
            .ok_or_else(|| AppError::Other(format!("no work window for team {team_id}")))?;
        let (start, end) = self.utc_range(from, to)?;

        let members = self.store.team_members(team_id)?;
        let mut per_member = Vec::with_capacity(members.len());

        for user_id in &members {
            let events = self.store.events_for_user(*user_id, start, end)?;
            per_member.push(compute_report(
                &events,
                &window,
                ReportType::Presence,
                self.tz,
            ));
        }

        let daily = aggregate_daily(&per_member, members.len());
        let weekly = aggregate_weekly(&daily);

        Ok(TeamAverages { daily, weekly })
    }

    /// Late/early/on-time/absent verdict for one user on one local day.
    pub fn compute_delay_status(&self, user_id: i64, date: NaiveDate) -> AppResult<DelayStatus> {
        let window = self.window_for_user(user_id)?;
        let (start, end) = self.utc_range(date, date + Duration::days(1))?;

        let mut events = self.store.events_for_user(user_id, start, end)?;
        events.sort_by_key(|e| e.at);

        Ok(delay_status(events.first(), &window, self.tz))
    }

    fn window_for_user(&self, user_id: i64) -> AppResult<WorkWindow> {
        let team_id = self
            .store
            .team_for_user(user_id)?
            .ok_or(AppError::NoTeamForUser(user_id))?;

        self.store
            .work_window(team_id)?
            .ok_or(AppError::NoTeamForUser(user_id))
    }

    /// `[from, to)` as UTC instants bounded by local midnights in `self.tz`.
    fn utc_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        if from >= to {
            return Err(AppError::InvalidDateRange(format!("{from} >= {to}")));
        }

        let start = to_utc(from.and_hms_opt(0, 0, 0).expect("midnight is valid"), self.tz)?;
        let end = to_utc(to.and_hms_opt(0, 0, 0).expect("midnight is valid"), self.tz)?;
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::core::tz::parse_tz;
    use crate::models::clock_event::ClockEvent;
    use crate::models::report::AttendanceStatus;
    use chrono::NaiveDateTime;

    fn ev(user: i64, ts: &str) -> ClockEvent {
        let at = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M")
            .unwrap()
            .and_utc();
        ClockEvent::new(user, at, None)
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_team(1, WorkWindow::new(9.0, 17.0).unwrap());
        store.add_user(10, 1);
        store.add_user(11, 1);
        store
    }

    #[test]
    fn lateness_report_for_one_user() {
        let mut store = seeded_store();
        store.add_event(ev(10, "2024-01-02 10:00"));

        let engine = ReportEngine::new(&store, parse_tz("UTC").unwrap());
        let metrics = engine
            .compute_report(10, ReportType::Lateness, d("2024-01-01"), d("2024-01-08"))
            .unwrap();

        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].day, d("2024-01-02"));
        assert_eq!(metrics[0].minutes, 60);
    }

    #[test]
    fn user_without_team_is_an_error() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store, parse_tz("UTC").unwrap());
        let err = engine
            .compute_report(99, ReportType::Lateness, d("2024-01-01"), d("2024-01-08"))
            .unwrap_err();
        assert!(matches!(err, AppError::NoTeamForUser(99)));
    }

    #[test]
    fn inverted_range_is_an_error() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store, parse_tz("UTC").unwrap());
        let err = engine
            .compute_report(10, ReportType::Lateness, d("2024-01-08"), d("2024-01-01"))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange(_)));
    }

    #[test]
    fn team_averages_use_full_member_count() {
        let mut store = seeded_store();
        // Only user 10 punched: 8 hours on Jan 2. User 11 stayed home.
        store.add_event(ev(10, "2024-01-02 09:00"));
        store.add_event(ev(10, "2024-01-02 17:00"));

        let engine = ReportEngine::new(&store, parse_tz("UTC").unwrap());
        let averages = engine
            .compute_team_averages(1, d("2024-01-01"), d("2024-01-08"))
            .unwrap();

        assert_eq!(averages.daily.len(), 1);
        assert_eq!(averages.daily[0].hours, 4.0); // 8h / 2 members
        assert_eq!(averages.weekly.len(), 1);
        assert_eq!(averages.weekly[0].week, "2024-W01");
        assert_eq!(averages.weekly[0].hours, 4.0);
    }

    #[test]
    fn delay_status_absent_without_events() {
        let store = seeded_store();
        let engine = ReportEngine::new(&store, parse_tz("UTC").unwrap());
        let st = engine.compute_delay_status(10, d("2024-01-02")).unwrap();
        assert_eq!(st.status, AttendanceStatus::Absent);
    }

    #[test]
    fn delay_status_reads_first_event_of_local_day() {
        let mut store = seeded_store();
        store.add_event(ev(10, "2024-01-02 11:00"));
        store.add_event(ev(10, "2024-01-02 09:05"));

        let engine = ReportEngine::new(&store, parse_tz("UTC").unwrap());
        let st = engine.compute_delay_status(10, d("2024-01-02")).unwrap();
        assert_eq!(st.status, AttendanceStatus::Late);
        assert_eq!(st.delay_minutes, 5);
    }

    #[test]
    fn paris_report_buckets_by_local_day() {
        // 23:30 UTC Jan 1 = 00:30 Paris Jan 2; the event lands on Jan 2.
        let mut store = MemoryStore::new();
        store.add_team(1, WorkWindow::new(0.0, 8.0).unwrap());
        store.add_user(10, 1);
        store.add_event(ev(10, "2024-01-01 23:30"));

        let tz = parse_tz("Europe/Paris").unwrap();
        let engine = ReportEngine::new(&store, tz);
        let metrics = engine
            .compute_report(10, ReportType::Lateness, d("2024-01-02"), d("2024-01-03"))
            .unwrap();

        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].day, d("2024-01-02"));
        assert_eq!(metrics[0].minutes, 30);
    }
}
