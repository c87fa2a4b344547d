use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tz::{format_with_offset, parse_tz};
use crate::db::queries::insert_event;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::direction::Direction;
use crate::ui::messages::success;
use crate::utils::time::parse_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        user,
        at,
        direction,
        tz,
    } = cmd
    {
        let tz = parse_tz(tz.as_deref().unwrap_or(&cfg.default_timezone))?;
        let at = parse_timestamp(at, tz)?;

        let direction = match direction.as_deref() {
            None => None,
            Some(s) => Some(
                Direction::from_db_str(s)
                    .ok_or_else(|| AppError::InvalidDirection(s.to_string()))?,
            ),
        };

        let store = SqliteStore::open(&cfg.database)?;
        insert_event(&store.pool.conn, &ClockEvent::new(*user, at, direction))?;

        success(format!(
            "Punch recorded for user {} at {}",
            user,
            format_with_offset(at, tz)
        ));
    }
    Ok(())
}
