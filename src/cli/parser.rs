use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendo
/// CLI front-end for the attendance reporting engine backed by SQLite
#[derive(Parser)]
#[command(
    name = "attendo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance reporting CLI: record punches and derive lateness, pauses and presence",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid values")]
        check: bool,
    },

    /// Create a team with its work-hour window
    Team {
        /// Team name
        name: String,

        /// Expected daily window (HH:MM-HH:MM); defaults to the configured one
        #[arg(long = "window")]
        window: Option<String>,
    },

    /// Create a user, optionally assigned to a team
    User {
        /// User name
        name: String,

        /// Team id the user belongs to
        #[arg(long = "team")]
        team: Option<i64>,
    },

    /// Record a clock punch for a user
    Punch {
        /// User id
        user: i64,

        /// Timestamp: RFC 3339 (2024-01-02T10:00:00Z) or local "YYYY-MM-DD HH:MM"
        at: String,

        /// Direction tag: in | out (omit for untagged legacy-style punches)
        #[arg(long = "dir")]
        direction: Option<String>,

        /// Timezone for naive timestamps (defaults to the configured one)
        #[arg(long = "tz")]
        tz: Option<String>,
    },

    /// Compute a per-day report for a user, or team averages with --team
    Report {
        /// User id (omit when using --team)
        user: Option<i64>,

        /// Compute presence averages for this team instead of a user report
        #[arg(long = "team", conflicts_with = "user")]
        team: Option<i64>,

        /// Report type: lateness | earlyness | pause_times | presence
        #[arg(long = "type", default_value = "lateness")]
        report_type: String,

        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end ranges (default: current month)
        #[arg(long, short)]
        period: Option<String>,

        /// Timezone override (IANA id)
        #[arg(long = "tz")]
        tz: Option<String>,
    },

    /// Late/early/on-time/absent verdict for a user on one day
    Status {
        /// User id
        user: i64,

        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,

        /// Timezone override (IANA id)
        #[arg(long = "tz")]
        tz: Option<String>,
    },

    /// Export a user's report
    Export {
        /// User id
        user: i64,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Report type: lateness | earlyness | pause_times | presence
        #[arg(long = "type", default_value = "presence")]
        report_type: String,

        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end ranges (default: current month)
        #[arg(long, short)]
        period: Option<String>,

        /// Timezone override (IANA id)
        #[arg(long = "tz")]
        tz: Option<String>,
    },
}
