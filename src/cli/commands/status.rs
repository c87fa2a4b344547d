use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::ReportEngine;
use crate::core::tz::parse_tz;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::report::AttendanceStatus;
use crate::ui::messages::paint_status;
use crate::utils::date::{parse_date, today};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { user, date, tz } = cmd {
        let tz = parse_tz(tz.as_deref().unwrap_or(&cfg.default_timezone))?;
        let date = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };

        let store = SqliteStore::open(&cfg.database)?;
        let engine = ReportEngine::new(&store, tz);
        let st = engine.compute_delay_status(*user, date)?;

        match st.status {
            AttendanceStatus::Absent => {
                println!("{}  user {}  {}", date, user, paint_status(st.status));
            }
            _ => {
                println!(
                    "{}  user {}  {}  ({})",
                    date,
                    user,
                    paint_status(st.status),
                    format_minutes(st.delay_minutes, true)
                );
            }
        }
    }
    Ok(())
}
