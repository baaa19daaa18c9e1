pub mod add;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod master;
pub mod report;
pub mod services;

use crate::config::Config;
use crate::core::period::{DateRange, PeriodKey, resolve};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date;

/// Turn `--period` / `--from` / `--to` into a concrete range.
///
/// `--from`/`--to` without `--period` imply `custom`; no option at all
/// falls back to `default_period` from the configuration.
pub(crate) fn resolve_cli_range(
    period: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    cfg: &Config,
) -> AppResult<DateRange> {
    // Parsing cannot fail: unrecognized keys become `PeriodKey::Unknown`.
    let Ok(key) = match period {
        Some(p) => p.parse::<PeriodKey>(),
        None if from.is_some() || to.is_some() => Ok(PeriodKey::Custom),
        None => cfg.default_period.parse::<PeriodKey>(),
    };

    if !key.is_known() {
        warning(format!(
            "Unknown period '{}', showing today only.",
            key.as_str()
        ));
    }

    resolve(&key, from.as_deref(), to.as_deref(), date::today()).ok_or_else(|| {
        AppError::InvalidRange("custom range needs valid --from and --to (YYYY-MM-DD)".into())
    })
}
