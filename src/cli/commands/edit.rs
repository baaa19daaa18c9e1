use super::add::{check_master, clean_services, required};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::EntryPatch;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::utils::amount::parse_optional_amount;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_str,
        master,
        car,
        services,
        work,
        parts,
    } = cmd
    {
        //
        // 1. Build the typed patch
        //
        let date = match date_str {
            Some(s) => Some(date::fmt_date(
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            )),
            None => None,
        };

        let patch = EntryPatch {
            date,
            master: master.as_deref().map(|m| required(m, "master")).transpose()?,
            car: car.as_deref().map(|c| required(c, "car")).transpose()?,
            services: if services.is_empty() {
                None
            } else {
                Some(clean_services(services))
            },
            work_cost: parse_optional_amount(work.as_ref())?,
            parts_markup: parse_optional_amount(parts.as_ref())?,
        };

        if patch.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        if let Some(m) = &patch.master {
            check_master(&pool, m)?;
        }

        //
        // 2. Apply
        //
        let mut store = RecordStore::new(pool.storage());
        if !store.update(*id, &patch)? {
            return Err(AppError::EntryNotFound(*id));
        }

        ttlog_soft(&pool.conn, "edit", &id.to_string(), &format!("{patch:?}"));
        success(format!("Entry #{id} updated."));
    }

    Ok(())
}
