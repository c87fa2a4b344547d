use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::ReportEngine;
use crate::core::tz::parse_tz;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::report::{DailyMetric, ReportType, TeamAverages};
use crate::ui::messages::info;
use crate::utils::date::resolve_period;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        user,
        team,
        report_type,
        period,
        tz,
    } = cmd
    {
        let tz = parse_tz(tz.as_deref().unwrap_or(&cfg.default_timezone))?;
        let (from, to) = resolve_period(period.as_deref())?;
        let store = SqliteStore::open(&cfg.database)?;
        let engine = ReportEngine::new(&store, tz);

        match (user, team) {
            (Some(user_id), None) => {
                let rt = ReportType::rt_from_str(report_type)?;
                let metrics = engine.compute_report(*user_id, rt, from, to)?;
                print_user_report(*user_id, rt, &metrics);
            }
            (None, Some(team_id)) => {
                let averages = engine.compute_team_averages(*team_id, from, to)?;
                print_team_averages(*team_id, &averages);
            }
            _ => {
                return Err(AppError::Other(
                    "report needs either a user id or --team".to_string(),
                ));
            }
        }
    }
    Ok(())
}

fn print_user_report(user_id: i64, report_type: ReportType, metrics: &[DailyMetric]) {
    println!("\n=== {} for user {} ===", report_type.rt_as_str(), user_id);

    if metrics.is_empty() {
        info("No events in the selected period.");
        return;
    }

    for m in metrics {
        println!("{}  {:>6}  ({} min)", m.day, format_minutes(m.minutes, false), m.minutes);
    }
}

fn print_team_averages(team_id: i64, averages: &TeamAverages) {
    println!("\n=== presence averages for team {} ===", team_id);

    if averages.daily.is_empty() {
        info("No events in the selected period.");
        return;
    }

    println!("Daily (hours per member):");
    for d in &averages.daily {
        println!("  {}  {:.2} h", d.day, d.hours);
    }

    println!("Weekly (hours per member):");
    for w in &averages.weekly {
        println!("  {}  {:.2} h", w.week, w.hours);
    }
}
