use super::direction::Direction;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// A single raw punch. Append-only: once recorded it is never edited by the
/// reporting engine, which treats the event stream as an immutable fact log.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i64,
    pub user_id: i64,                 // ⇔ events.user_id
    pub at: DateTime<Utc>,            // ⇔ events.at_utc (TEXT, RFC3339 UTC)
    pub direction: Option<Direction>, // ⇔ events.direction ('in' | 'out' | NULL for legacy rows)
    pub source: String,               // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String,           // ⇔ events.created_at (TEXT, ISO8601)
}

impl ClockEvent {
    /// High-level constructor for events recorded from the CLI.
    /// - `id = 0` (assigned by the store on insert)
    /// - `source = "cli"`
    /// - `created_at = now() in ISO8601`
    pub fn new(user_id: i64, at: DateTime<Utc>, direction: Option<Direction>) -> Self {
        Self {
            id: 0,
            user_id,
            at,
            direction,
            source: "cli".to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Calendar date of this event as observed in `tz`.
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        self.at.with_timezone(&tz).date_naive()
    }
}
