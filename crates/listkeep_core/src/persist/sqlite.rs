//! SQLite-backed key-value port.
//!
//! # Responsibility
//! - Persist snapshots in the `kv_entries` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Construction rejects connections that are not fully migrated.
//! - One `save` is one upsert statement.

use crate::db::migrations::{latest_version, schema_version};
use crate::persist::{PersistenceError, PersistencePort, PersistenceResult};
use rusqlite::{params, Connection, OptionalExtension};

const KV_TABLE: &str = "kv_entries";

/// Key-value port over a migrated SQLite connection.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> PersistenceResult<Self> {
        let expected_version = latest_version();
        let actual_version = schema_version(conn)?;
        if actual_version < expected_version {
            return Err(PersistenceError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [KV_TABLE],
            |row| row.get(0),
        )?;
        if !table_exists {
            return Err(PersistenceError::MissingRequiredTable(KV_TABLE));
        }

        Ok(Self { conn })
    }
}

impl PersistencePort for SqliteKvStore<'_> {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, snapshot: &str) -> PersistenceResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, snapshot],
        )?;
        Ok(())
    }
}
