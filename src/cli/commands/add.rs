use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::NewEntry;
use crate::store::RecordStore;
use crate::store::roster::{is_known_master, roster_masters};
use crate::ui::messages::{success, warning};
use crate::utils::amount::parse_optional_amount;
use crate::utils::{date, format_money};

/// Trim and reject empty text fields.
pub(crate) fn required(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        Err(AppError::MissingField(field))
    } else {
        Ok(v.to_string())
    }
}

/// Clean up `--service` values: trimmed, blanks dropped, order kept.
pub(crate) fn clean_services(services: &[String]) -> Vec<String> {
    services
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The store accepts any master; the roster check lives here.
/// An empty roster disables the check.
pub(crate) fn check_master(pool: &DbPool, master: &str) -> AppResult<()> {
    let storage = pool.storage();
    if roster_masters(&storage).is_empty() {
        warning("Roster is empty: technician not validated (see `master add`).");
        return Ok(());
    }
    if !is_known_master(&storage, master) {
        return Err(AppError::UnknownMaster(master.to_string()));
    }
    Ok(())
}

/// Record a new service job.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        master,
        car,
        services,
        work,
        parts,
    } = cmd
    {
        //
        // 1. Validate input
        //
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let master = required(master, "master")?;
        let car = required(car, "car")?;
        let work_cost = parse_optional_amount(work.as_ref())?.unwrap_or(0.0);
        let parts_markup = parse_optional_amount(parts.as_ref())?.unwrap_or(0.0);

        let pool = DbPool::new(&cfg.database)?;
        check_master(&pool, &master)?;

        //
        // 2. Persist
        //
        let mut store = RecordStore::new(pool.storage());
        let entry = store.create(NewEntry {
            date: date::fmt_date(d),
            master,
            car,
            services: clean_services(services),
            work_cost,
            parts_markup,
        })?;

        ttlog_soft(
            &pool.conn,
            "add",
            &entry.id.to_string(),
            &format!(
                "{} | {} | {} | total {}",
                entry.date,
                entry.master,
                entry.car,
                format_money(entry.total())
            ),
        );

        success(format!(
            "Entry #{} recorded for {} on {} (total {}).",
            entry.id,
            entry.master,
            entry.date,
            format_money(entry.total())
        ));
    }

    Ok(())
}
