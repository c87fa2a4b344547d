use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::insert_user;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { name, team } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let id = insert_user(&store.pool.conn, name, *team)?;

        match team {
            Some(t) => success(format!("User '{name}' created with id {id} (team {t}).")),
            None => success(format!("User '{name}' created with id {id} (no team).")),
        }
    }
    Ok(())
}
