use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;

/// A team's expected daily start/end, in local decimal hours.
///
/// `start_hour = 9.5` means 09:30 local time. The reporting engine only ever
/// reads the window; it is set at team creation and edited by managers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WorkWindow {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl WorkWindow {
    pub fn new(start_hour: f64, end_hour: f64) -> AppResult<Self> {
        if !(0.0..24.0).contains(&start_hour)
            || !(0.0..=24.0).contains(&end_hour)
            || start_hour >= end_hour
        {
            return Err(AppError::InvalidWindow(format!(
                "{start_hour}-{end_hour} (need 0 <= start < end <= 24)"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Parse a window from its config/CLI form, e.g. `"09:00-17:30"`.
    pub fn parse(s: &str) -> AppResult<Self> {
        // Compiled per call: windows are parsed once per command, not in a loop.
        let re = Regex::new(r"^(\d{1,2}):(\d{2})-(\d{1,2}):(\d{2})$")
            .map_err(|e| AppError::Other(e.to_string()))?;

        let caps = re
            .captures(s)
            .ok_or_else(|| AppError::InvalidWindow(s.to_string()))?;

        let field = |i: usize| -> f64 { caps[i].parse::<f64>().unwrap_or(0.0) };

        let (sh, sm, eh, em) = (field(1), field(2), field(3), field(4));
        if sm >= 60.0 || em >= 60.0 {
            return Err(AppError::InvalidWindow(s.to_string()));
        }

        Self::new(sh + sm / 60.0, eh + em / 60.0)
    }
}
