use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Opening the store runs pending migrations and creates the schema.
    let cfg = if let Some(db) = &cli.db {
        let mut c = Config::load();
        c.database = db.clone();
        c
    } else {
        Config::load()
    };

    SqliteStore::open(&cfg.database)?;
    success("Database initialized.");
    Ok(())
}
