use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tz::parse_tz;
use crate::errors::AppResult;
use crate::models::work_window::WorkWindow;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("database:            {}", cfg.database);
            println!("default_timezone:    {}", cfg.default_timezone);
            println!("default_work_window: {}", cfg.default_work_window);
        }

        if *check {
            let mut ok = true;

            if parse_tz(&cfg.default_timezone).is_err() {
                warning(format!("unknown timezone: {}", cfg.default_timezone));
                ok = false;
            }
            if WorkWindow::parse(&cfg.default_work_window).is_err() {
                warning(format!("invalid work window: {}", cfg.default_work_window));
                ok = false;
            }

            if ok {
                success("Configuration looks valid.");
            }
        }
    }
    Ok(())
}
