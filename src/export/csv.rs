use crate::models::report::{DailyMetric, ReportType};
use csv::Writer;

/// Write one row per day: date, metric name, minutes.
pub fn write_csv(path: &str, report_type: ReportType, metrics: &[DailyMetric]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["day", "metric", "minutes"])?;

    for m in metrics {
        wtr.write_record(&[
            m.day.to_string(),
            report_type.rt_as_str().to_string(),
            m.minutes.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
