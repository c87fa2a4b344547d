pub mod config;
pub mod export;
pub mod init;
pub mod punch;
pub mod report;
pub mod status;
pub mod team;
pub mod user;
