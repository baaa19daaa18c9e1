//! Technician roster (identifier → credential).
//!
//! The record store never consults it; callers that want referential
//! integrity for `Entry::master` check against [`roster_masters`]
//! themselves. Credentials are kept in plaintext and never verified here.

use super::{Storage, USERS_KEY};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::collections::BTreeMap;

pub type Roster = BTreeMap<String, String>;

/// Load the roster. Missing or corrupt key → empty roster.
pub fn load_roster<S: Storage>(storage: &S) -> Roster {
    match storage.get(USERS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warning(format!("Stored roster is corrupt, ignoring it: {e}"));
            Roster::new()
        }),
        Ok(None) => Roster::new(),
        Err(e) => {
            warning(format!("Cannot read roster: {e}"));
            Roster::new()
        }
    }
}

/// Valid `master` values, sorted.
pub fn roster_masters<S: Storage>(storage: &S) -> Vec<String> {
    load_roster(storage).into_keys().collect()
}

pub fn is_known_master<S: Storage>(storage: &S, master: &str) -> bool {
    load_roster(storage).contains_key(master)
}

/// Used only by the CLI `master` command, never by the record store.
pub fn save_roster<S: Storage>(storage: &mut S, roster: &Roster) -> AppResult<()> {
    let raw = serde_json::to_string(roster)?;
    storage.set(USERS_KEY, &raw)
}
