//! Single-day attendance verdict from the first punch of the day.

use crate::core::tz::local_hour;
use crate::models::clock_event::ClockEvent;
use crate::models::report::{AttendanceStatus, DelayStatus};
use crate::models::work_window::WorkWindow;
use chrono_tz::Tz;

/// `Absent` when the day has no punch at all; otherwise the signed minute
/// offset between the first punch and the window's start hour decides.
pub fn delay_status(first_event: Option<&ClockEvent>, window: &WorkWindow, tz: Tz) -> DelayStatus {
    let Some(first) = first_event else {
        return DelayStatus {
            status: AttendanceStatus::Absent,
            delay_minutes: 0,
        };
    };

    let delay_minutes = ((local_hour(first.at, tz) - window.start_hour) * 60.0).round() as i64;

    let status = match delay_minutes {
        d if d > 0 => AttendanceStatus::Late,
        d if d < 0 => AttendanceStatus::Early,
        _ => AttendanceStatus::OnTime,
    };

    DelayStatus {
        status,
        delay_minutes,
    }
}
