use crate::cli::parser::{Commands, MasterAction};
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::roster::{load_roster, save_roster};
use crate::ui::messages::{info, success};

/// Roster maintenance. This is the only writer of the users key.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Master { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut storage = pool.storage();
        let mut roster = load_roster(&storage);

        match action {
            MasterAction::Add { id, credential } => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(AppError::MissingField("master id"));
                }
                roster.insert(id.to_string(), credential.clone());
                save_roster(&mut storage, &roster)?;

                ttlog_soft(&pool.conn, "master", id, "added to roster");
                success(format!("Master '{id}' added to the roster."));
            }
            MasterAction::Remove { id } => {
                if roster.remove(id.trim()).is_none() {
                    info(format!("Master '{id}' is not in the roster."));
                    return Ok(());
                }
                save_roster(&mut storage, &roster)?;

                ttlog_soft(&pool.conn, "master", id, "removed from roster");
                success(format!("Master '{id}' removed from the roster."));
            }
            MasterAction::List => {
                if roster.is_empty() {
                    info("Roster is empty.");
                }
                for id in roster.keys() {
                    println!("- {id}");
                }
            }
        }
    }
    Ok(())
}
