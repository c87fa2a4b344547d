use crate::errors::{AppError, AppResult};
use crate::models::report::{DailyMetric, ReportType};
use serde_json::json;

/// Pretty-printed JSON: `{"report": "...", "days": [{day, minutes}, ...]}`.
pub fn write_json(path: &str, report_type: ReportType, metrics: &[DailyMetric]) -> AppResult<()> {
    let doc = json!({
        "report": report_type.rt_as_str(),
        "days": metrics,
    });

    let pretty =
        serde_json::to_string_pretty(&doc).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, pretty)?;
    Ok(())
}
