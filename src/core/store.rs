//! The clock event store as an injected capability.
//!
//! The engine only ever reads through this trait, which keeps the reporting
//! logic testable against [`MemoryStore`] and leaves persistence to `db`.

use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::work_window::WorkWindow;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub trait ClockEventStore {
    /// All events for `user_id` with `from <= at < to`. Ordering is NOT
    /// guaranteed; the engine re-sorts.
    fn events_for_user(
        &self,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<ClockEvent>>;

    fn work_window(&self, team_id: i64) -> AppResult<Option<WorkWindow>>;

    fn team_members(&self, team_id: i64) -> AppResult<Vec<i64>>;

    fn team_for_user(&self, user_id: i64) -> AppResult<Option<i64>>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<ClockEvent>,
    windows: HashMap<i64, WorkWindow>,
    members: HashMap<i64, Vec<i64>>,
    user_team: HashMap<i64, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_team(&mut self, team_id: i64, window: WorkWindow) {
        self.windows.insert(team_id, window);
        self.members.entry(team_id).or_default();
    }

    pub fn add_user(&mut self, user_id: i64, team_id: i64) {
        self.user_team.insert(user_id, team_id);
        self.members.entry(team_id).or_default().push(user_id);
    }

    pub fn add_event(&mut self, event: ClockEvent) {
        self.events.push(event);
    }
}

impl ClockEventStore for MemoryStore {
    fn events_for_user(
        &self,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<ClockEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.user_id == user_id && e.at >= from && e.at < to)
            .cloned()
            .collect())
    }

    fn work_window(&self, team_id: i64) -> AppResult<Option<WorkWindow>> {
        Ok(self.windows.get(&team_id).copied())
    }

    fn team_members(&self, team_id: i64) -> AppResult<Vec<i64>> {
        Ok(self.members.get(&team_id).cloned().unwrap_or_default())
    }

    fn team_for_user(&self, user_id: i64) -> AppResult<Option<i64>> {
        Ok(self.user_team.get(&user_id).copied())
    }
}
