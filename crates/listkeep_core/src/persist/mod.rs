//! Key-value persistence boundary for list snapshots.
//!
//! # Responsibility
//! - Define the `PersistencePort` contract the store writes through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - `save` overwrites the whole value under a key; there are no partial writes.
//! - Write failures are returned to the caller, never swallowed.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Failure raised by a persistence port.
#[derive(Debug)]
pub enum PersistenceError {
    /// Write would push total stored bytes past the configured quota.
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        quota_bytes: usize,
    },
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    /// Snapshot could not be serialized before writing.
    Encode(serde_json::Error),
    Db(DbError),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required_bytes} bytes needed, quota is {quota_bytes}"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not ready (expected {expected_version})"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for PersistenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value storage for serialized snapshots.
pub trait PersistencePort {
    /// Returns the stored value, or `None` when the key was never saved.
    fn load(&self, key: &str) -> PersistenceResult<Option<String>>;

    /// Stores `snapshot` under `key`, replacing any prior value.
    fn save(&mut self, key: &str, snapshot: &str) -> PersistenceResult<()>;
}

impl<P: PersistencePort + ?Sized> PersistencePort for &mut P {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, snapshot: &str) -> PersistenceResult<()> {
        (**self).save(key, snapshot)
    }
}
