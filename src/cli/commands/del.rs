use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::format_money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let mut store = RecordStore::new(pool.storage());

        // Eliminare un id inesistente non è un errore
        let Some(entry) = store.get(*id) else {
            info(format!("No entry with id {id}: nothing to delete."));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete entry #{} ({} | {} | {} | {})? This action is irreversible.",
            entry.id,
            entry.date,
            entry.master,
            entry.car,
            format_money(entry.total())
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete(*id)?;

        ttlog_soft(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("{} | {} | {}", entry.date, entry.master, entry.car),
        );
        success(format!("Entry #{id} has been deleted."));
    }

    Ok(())
}
