pub mod clock_event;
pub mod direction;
pub mod report;
pub mod work_window;
