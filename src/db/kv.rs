//! `kv_store` table: one row per logical key, whole-value writes.

use crate::errors::AppResult;
use crate::store::Storage;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStorage<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStorage<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Keys currently stored, with the size of their value in bytes.
    pub fn keys(&self) -> AppResult<Vec<(String, i64, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, length(value), updated_at FROM kv_store ORDER BY key ASC",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl Storage for SqliteStorage<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    // Una sola istruzione: SQLite garantisce l'atomicità della scrittura
    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}
