use super::{ENTRIES_KEY, Storage};
use crate::errors::AppResult;
use crate::models::{Entry, EntryPatch, NewEntry};
use crate::ui::messages::warning;
use chrono::Utc;

/// Durable list of service-log entries.
///
/// The store is a thin layer over a [`Storage`]: it holds no cached copy,
/// every call reads the current document and every mutation rewrites it
/// entirely. Two processes sharing the same storage are not coordinated
/// (last write wins).
pub struct RecordStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// All entries in storage order.
    ///
    /// A missing key yields an empty list. A read error or a corrupt
    /// document also yields an empty list (with a warning): listing never
    /// fails.
    pub fn list(&self) -> Vec<Entry> {
        self.load().unwrap_or_else(|e| {
            warning(format!("Cannot read service entries: {e}"));
            Vec::new()
        })
    }

    pub fn get(&self, id: i64) -> Option<Entry> {
        self.list().into_iter().find(|e| e.id == id)
    }

    /// Append a new entry with a fresh id and persist the whole collection.
    pub fn create(&mut self, new_entry: NewEntry) -> AppResult<Entry> {
        let mut entries = self.load()?;
        let id = next_id(&entries, Utc::now().timestamp_millis());

        let entry = new_entry.with_id(id);
        entries.push(entry.clone());

        self.persist(&entries)?;
        Ok(entry)
    }

    /// Overwrite the fields present in `patch`. Returns `false` (and writes
    /// nothing) when no entry has `id`.
    pub fn update(&mut self, id: i64, patch: &EntryPatch) -> AppResult<bool> {
        let mut entries = self.load()?;

        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        entry.apply(patch);

        self.persist(&entries)?;
        Ok(true)
    }

    /// Remove every entry with `id`. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        let entries = self.load()?;
        let before = entries.len();

        let remaining: Vec<Entry> = entries.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == before {
            return Ok(());
        }

        self.persist(&remaining)
    }

    /// Erase the entire collection (maintenance only).
    pub fn clear(&mut self) -> AppResult<()> {
        self.storage.remove(ENTRIES_KEY)
    }

    /// Current collection as the base of a mutation. Storage errors are
    /// returned so a failed read never gets written back as an empty list;
    /// a corrupt document still counts as empty.
    fn load(&self) -> AppResult<Vec<Entry>> {
        let Some(raw) = self.storage.get(ENTRIES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warning(format!("Stored service entries are corrupt, ignoring them: {e}"));
                Ok(Vec::new())
            }
        }
    }

    fn persist(&mut self, entries: &[Entry]) -> AppResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set(ENTRIES_KEY, &raw)
    }
}

/// Timestamp-based id with a tie-breaker: when the clock has not moved
/// past the largest id already stored, take `max + 1`.
pub fn next_id(entries: &[Entry], now_millis: i64) -> i64 {
    match entries.iter().map(|e| e.id).max() {
        Some(max) if max >= now_millis => max + 1,
        _ => now_millis,
    }
}
