use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::ReportEngine;
use crate::core::tz::parse_tz;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::models::report::ReportType;
use crate::utils::date::resolve_period;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        user,
        format,
        file,
        report_type,
        period,
        tz,
    } = cmd
    {
        let tz = parse_tz(tz.as_deref().unwrap_or(&cfg.default_timezone))?;
        let rt = ReportType::rt_from_str(report_type)?;
        let (from, to) = resolve_period(period.as_deref())?;

        let store = SqliteStore::open(&cfg.database)?;
        let engine = ReportEngine::new(&store, tz);
        let metrics = engine.compute_report(*user, rt, from, to)?;

        match format {
            ExportFormat::Csv => write_csv(file, rt, &metrics)?,
            ExportFormat::Json => write_json(file, rt, &metrics)?,
        }

        notify_export_success(format.as_str(), Path::new(file));
    }
    Ok(())
}
