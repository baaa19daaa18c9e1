//! Services catalog: the bundled base list merged with user additions.

use super::{CUSTOM_SERVICES_KEY, Storage};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::collections::BTreeMap;

pub type Catalog = BTreeMap<String, Vec<String>>;

const BASE_CATALOG: &str = include_str!("../../assets/data/services.json");

pub fn base_catalog() -> AppResult<Catalog> {
    serde_json::from_str(BASE_CATALOG)
        .map_err(|e| AppError::Config(format!("bundled services catalog is invalid: {e}")))
}

/// User-added services. Missing or corrupt key → empty.
pub fn custom_services<S: Storage>(storage: &S) -> Catalog {
    match storage.get(CUSTOM_SERVICES_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warning(format!("Stored custom services are corrupt, ignoring them: {e}"));
            Catalog::new()
        }),
        Ok(None) => Catalog::new(),
        Err(e) => {
            warning(format!("Cannot read custom services: {e}"));
            Catalog::new()
        }
    }
}

/// Per-category union, first occurrence wins, duplicates dropped.
pub fn merge(base: &Catalog, custom: &Catalog) -> Catalog {
    let mut out = Catalog::new();

    for source in [base, custom] {
        for (category, names) in source {
            let slot = out.entry(category.clone()).or_default();
            for name in names {
                let name = name.trim();
                if !name.is_empty() && !slot.iter().any(|n| n == name) {
                    slot.push(name.to_string());
                }
            }
        }
    }

    out
}

pub fn merged_catalog<S: Storage>(storage: &S) -> AppResult<Catalog> {
    Ok(merge(&base_catalog()?, &custom_services(storage)))
}

/// Add `name` under `category`. Returns `false` when the merged catalog
/// already lists it (nothing is written).
pub fn add_custom_service<S: Storage>(
    storage: &mut S,
    category: &str,
    name: &str,
) -> AppResult<bool> {
    let category = category.trim();
    let name = name.trim();
    if category.is_empty() {
        return Err(AppError::MissingField("category"));
    }
    if name.is_empty() {
        return Err(AppError::MissingField("service name"));
    }

    let merged = merged_catalog(storage)?;
    if merged
        .get(category)
        .is_some_and(|names| names.iter().any(|n| n == name))
    {
        return Ok(false);
    }

    let mut custom = custom_services(storage);
    custom
        .entry(category.to_string())
        .or_default()
        .push(name.to_string());

    let raw = serde_json::to_string(&custom)?;
    storage.set(CUSTOM_SERVICES_KEY, &raw)?;
    Ok(true)
}
