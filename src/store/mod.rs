//! Key-value storage abstraction and the stores built on top of it.
//!
//! Every logical collection lives under a single key and is always
//! read and written as a whole JSON document. The substrate only has to
//! guarantee that a single `set` is atomic.

pub mod catalog;
pub mod records;
pub mod roster;

pub use records::RecordStore;

use crate::errors::AppResult;
use std::collections::HashMap;

/// Key holding the JSON array of service-log entries.
pub const ENTRIES_KEY: &str = "service_entries";
/// Key holding the technician roster (identifier → credential).
pub const USERS_KEY: &str = "users";
/// Key holding user-added services (category → names).
pub const CUSTOM_SERVICES_KEY: &str = "custom_services";

/// Whole-value key-value storage.
pub trait Storage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// In-memory storage, used by tests and by dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value (e.g. a corrupt document) before handing it to a store.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
