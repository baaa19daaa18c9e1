use super::resolve_cli_range;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{ExportLogic, ExportOutcome, ExportRequest};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        from,
        to,
        force,
    } = cmd
    {
        let range = resolve_cli_range(period, from, to, cfg)?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = RecordStore::new(pool.storage()).list();

        let req = ExportRequest {
            format: *format,
            range,
            file: file.as_deref(),
            export_dir: &cfg.export_dir,
            force: *force,
        };

        if let ExportOutcome::Written { path, count } = ExportLogic::export(&entries, &req)? {
            ttlog_soft(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{count} entries ({range}) → {}", path.display()),
            );
        }
    }
    Ok(())
}
