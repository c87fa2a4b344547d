//! SQLite-backed [`ClockEventStore`].

use crate::core::store::ClockEventStore;
use crate::db::pool::DbPool;
use crate::db::{initialize, queries};
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::work_window::WorkWindow;
use chrono::{DateTime, Utc};

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open (and if needed migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl ClockEventStore for SqliteStore {
    fn events_for_user(
        &self,
        user_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<ClockEvent>> {
        queries::load_events_for_user(&self.pool.conn, user_id, from, to)
    }

    fn work_window(&self, team_id: i64) -> AppResult<Option<WorkWindow>> {
        queries::load_work_window(&self.pool.conn, team_id)
    }

    fn team_members(&self, team_id: i64) -> AppResult<Vec<i64>> {
        queries::load_team_members(&self.pool.conn, team_id)
    }

    fn team_for_user(&self, user_id: i64) -> AppResult<Option<i64>> {
        queries::load_team_for_user(&self.pool.conn, user_id)
    }
}
