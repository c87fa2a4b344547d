//! Schema creation and upgrades.
//!
//! All DDL lives here; `init_db` never issues CREATE TABLE directly. The one
//! historical migration adds the `direction` column to `events`: early
//! databases stored bare timestamps and inferred in/out from event position.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let found: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

fn events_has_direction_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "direction" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_base_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE,
            start_hour   REAL NOT NULL,
            end_hour     REAL NOT NULL,
            CHECK(start_hour >= 0 AND start_hour < end_hour AND end_hour <= 24)
        );

        CREATE TABLE IF NOT EXISTS users (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            team_id      INTEGER REFERENCES teams(id)
        );

        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL REFERENCES users(id),
            at_utc       TEXT NOT NULL,
            direction    TEXT CHECK(direction IN ('in','out')),
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_user_at ON events(user_id, at_utc);
        "#,
    )?;
    Ok(())
}

/// Add `direction` to an events table from before the tagged-punch schema.
/// Old rows keep NULL: the pairing logic treats them by index parity.
fn migrate_add_direction_to_events(conn: &Connection) -> AppResult<()> {
    if !table_exists(conn, "events")? {
        return Ok(());
    }

    if events_has_direction_column(conn)? {
        return Ok(());
    }

    warning("Adding 'direction' column to events table...");

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        ALTER TABLE events ADD COLUMN direction TEXT CHECK(direction IN ('in','out'));

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    )
    .map_err(|e| AppError::Migration(e.to_string()))?;

    success("'direction' column added.");
    Ok(())
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    migrate_add_direction_to_events(conn)?;
    create_base_schema(conn)?;
    Ok(())
}
