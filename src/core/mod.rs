pub mod aggregate;
pub mod bucket;
pub mod engine;
pub mod report;
pub mod status;
pub mod store;
pub mod tz;
