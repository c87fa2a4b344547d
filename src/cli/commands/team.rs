use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::insert_team;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::work_window::WorkWindow;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team { name, window } = cmd {
        let window_spec = window.as_deref().unwrap_or(&cfg.default_work_window);
        let window = WorkWindow::parse(window_spec)?;

        let store = SqliteStore::open(&cfg.database)?;
        let id = insert_team(&store.pool.conn, name, &window)?;

        success(format!("Team '{name}' created with id {id} (window {window_spec})."));
    }
    Ok(())
}
