use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};

/// Maintenance only: drops the whole entries collection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes {
            warning("This erases every recorded job. Re-run with --yes to confirm.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let mut store = RecordStore::new(pool.storage());
        let count = store.list().len();
        store.clear()?;

        ttlog_soft(
            &pool.conn,
            "clear",
            "service_entries",
            &format!("{count} entries erased"),
        );
        success(format!("{count} entries erased."));
    }

    Ok(())
}
