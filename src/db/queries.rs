use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::direction::Direction;
use crate::models::work_window::WorkWindow;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Canonical storage form for instants: RFC 3339 UTC with fixed millisecond
/// width, so TEXT comparison equals chronological comparison.
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(s.to_string())),
            )
        })
}

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let at_str: String = row.get("at_utc")?;
    let at = parse_instant(&at_str)?;

    let dir_str: Option<String> = row.get("direction")?;
    let direction = match dir_str {
        None => None,
        Some(s) => Some(Direction::from_db_str(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDirection(s.clone())),
            )
        })?),
    };

    Ok(ClockEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        at,
        direction,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// Raw events for one user in `[from, to)`. No ordering guarantee is part of
/// the contract; the engine re-sorts per day.
pub fn load_events_for_user(
    conn: &Connection,
    user_id: i64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM events
         WHERE user_id = ?1 AND at_utc >= ?2 AND at_utc < ?3",
    )?;

    let rows = stmt.query_map(
        params![user_id, format_instant(from), format_instant(to)],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Record a punch. Tagged punches are validated for alternation against both
/// tagged neighbors of `at`: the latest prior and the earliest following
/// event. Two consecutive 'in' (or 'out') tags are rejected at write time,
/// even for backdated punches, instead of corrupting later pairing.
pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<()> {
    if let Some(dir) = ev.direction {
        let last: Option<String> = conn
            .query_row(
                "SELECT direction FROM events
                 WHERE user_id = ?1 AND direction IS NOT NULL AND at_utc < ?2
                 ORDER BY at_utc DESC LIMIT 1",
                params![ev.user_id, format_instant(ev.at)],
                |row| row.get(0),
            )
            .optional()?;

        if let Some(prev) = last
            && prev == dir.to_db_str()
        {
            return Err(AppError::InvalidDirection(format!(
                "consecutive '{}' punches for user {} (previous one not closed)",
                prev, ev.user_id
            )));
        }

        let next: Option<String> = conn
            .query_row(
                "SELECT direction FROM events
                 WHERE user_id = ?1 AND direction IS NOT NULL AND at_utc > ?2
                 ORDER BY at_utc ASC LIMIT 1",
                params![ev.user_id, format_instant(ev.at)],
                |row| row.get(0),
            )
            .optional()?;

        if let Some(following) = next
            && following == dir.to_db_str()
        {
            return Err(AppError::InvalidDirection(format!(
                "consecutive '{}' punches for user {} (a later one already exists)",
                following, ev.user_id
            )));
        }
    }

    conn.execute(
        "INSERT INTO events (user_id, at_utc, direction, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ev.user_id,
            format_instant(ev.at),
            ev.direction.map(|d| d.to_db_str()),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

pub fn insert_team(conn: &Connection, name: &str, window: &WorkWindow) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO teams (name, start_hour, end_hour) VALUES (?1, ?2, ?3)",
        params![name, window.start_hour, window.end_hour],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_user(conn: &Connection, name: &str, team_id: Option<i64>) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (name, team_id) VALUES (?1, ?2)",
        params![name, team_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_work_window(conn: &Connection, team_id: i64) -> AppResult<Option<WorkWindow>> {
    let row: Option<(f64, f64)> = conn
        .query_row(
            "SELECT start_hour, end_hour FROM teams WHERE id = ?1",
            [team_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        None => Ok(None),
        Some((start, end)) => Ok(Some(WorkWindow::new(start, end)?)),
    }
}

pub fn load_team_members(conn: &Connection, team_id: i64) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM users WHERE team_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([team_id], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_team_for_user(conn: &Connection, user_id: i64) -> AppResult<Option<i64>> {
    let team: Option<Option<i64>> = conn
        .query_row("SELECT team_id FROM users WHERE id = ?1", [user_id], |row| {
            row.get(0)
        })
        .optional()?;

    Ok(team.flatten())
}
