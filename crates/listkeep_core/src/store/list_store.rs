//! Generic CRUD list store over a persistence port.
//!
//! # Responsibility
//! - Hydrate the list from one storage key and keep it in memory.
//! - Validate, apply and persist add/edit/toggle/remove operations.
//!
//! # Invariants
//! - Every successful mutation performs exactly one full-list `save`.
//! - Failed validation or lookup leaves the list untouched and writes nothing.
//! - A failed `save` does not roll back the in-memory change; the error is
//!   returned so callers can warn that the change may not survive a reload.
//! - Malformed stored data loads as an empty list and reports `CorruptData`.

use crate::model::record::{ListRecord, RecordId, Toggle, ValidationError};
use crate::persist::{PersistenceError, PersistencePort};
use crate::store::ids::IdGenerator;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound(RecordId),
    Persistence(PersistenceError),
    CorruptData {
        key: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether in-memory state is still consistent with the last good save.
    ///
    /// True for validation failures (nothing changed) and corrupt loads (the
    /// store restarted empty). False for lookups on missing ids and for
    /// failed writes.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::CorruptData { .. })
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Persistence(err) => write!(f, "persistence failed: {err}"),
            Self::CorruptData { key, source } => {
                write!(f, "stored data under `{key}` is corrupt: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
            Self::CorruptData { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Result of a confirmation-gated removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Absent,
    Declined,
}

/// Ordered record list bound to one storage key.
pub struct ListStore<T: ListRecord, P: PersistencePort> {
    key: String,
    port: P,
    records: Vec<T>,
    ids: IdGenerator,
}

impl<T: ListRecord, P: PersistencePort> ListStore<T, P> {
    /// Creates an empty store. Call `load` to hydrate it.
    pub fn new(port: P, key: impl Into<String>) -> Self {
        Self::with_ids(port, key, IdGenerator::new())
    }

    /// Creates an empty store with a custom id source.
    pub fn with_ids(port: P, key: impl Into<String>, ids: IdGenerator) -> Self {
        Self {
            key: key.into(),
            port,
            records: Vec::new(),
            ids,
        }
    }

    /// Replaces in-memory state with the stored snapshot.
    ///
    /// Returns the number of loaded records. Absent data yields an empty
    /// list. Stored records are trusted as written and not re-validated.
    ///
    /// # Errors
    /// - `Persistence` when the port cannot be read; the list is left as is.
    /// - `CorruptData` when the stored value is not a valid record array; the
    ///   list is reset to empty.
    pub fn load(&mut self) -> StoreResult<usize> {
        let raw = match self.port.load(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error kind={} key={} error={}",
                    T::KIND,
                    self.key,
                    err
                );
                return Err(err.into());
            }
        };

        let Some(raw) = raw else {
            self.records.clear();
            info!(
                "event=store_load module=store status=ok kind={} key={} count=0 source=absent",
                T::KIND,
                self.key
            );
            return Ok(0);
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => {
                for record in &records {
                    self.ids.observe(record.id());
                }
                self.records = records;
                info!(
                    "event=store_load module=store status=ok kind={} key={} count={}",
                    T::KIND,
                    self.key,
                    self.records.len()
                );
                Ok(self.records.len())
            }
            Err(source) => {
                self.records.clear();
                warn!(
                    "event=store_load module=store status=corrupt kind={} key={} bytes={} error={}",
                    T::KIND,
                    self.key,
                    raw.len(),
                    source
                );
                Err(StoreError::CorruptData {
                    key: self.key.clone(),
                    source,
                })
            }
        }
    }

    /// Discards in-memory state and re-reads the last saved snapshot.
    pub fn reload(&mut self) -> StoreResult<usize> {
        self.load()
    }

    /// Validates `draft`, appends the new record and persists.
    pub fn add(&mut self, draft: &T::Draft) -> StoreResult<T> {
        let id = self.ids.next_id();
        let record = T::from_draft(id, draft).map_err(|err| self.rejected("add", err))?;
        self.records.push(record.clone());
        self.persist("add", id)?;
        Ok(record)
    }

    /// Applies `patch` to the record with `id` in place and persists.
    pub fn edit(&mut self, id: RecordId, patch: &T::Patch) -> StoreResult<T> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let next = self.records[index]
            .patched(patch)
            .map_err(|err| self.rejected("edit", err))?;
        debug_assert_eq!(next.id(), id, "patched record must keep its id");
        self.records[index] = next.clone();
        self.persist("edit", id)?;
        Ok(next)
    }

    /// Removes the record with `id` if present, then persists.
    ///
    /// Returns whether a record was removed. Removing a missing id is not an
    /// error.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        self.persist("remove", id)?;
        Ok(removed)
    }

    /// Asks `confirm` before removing the record with `id`.
    ///
    /// A declined confirmation performs no write.
    pub fn remove_confirmed(
        &mut self,
        id: RecordId,
        confirm: impl FnOnce(&T) -> bool,
    ) -> StoreResult<RemoveOutcome> {
        let Some(record) = self.get(id) else {
            self.remove(id)?;
            return Ok(RemoveOutcome::Absent);
        };
        if !confirm(record) {
            info!(
                "event=store_remove module=store status=declined kind={} id={}",
                T::KIND,
                id
            );
            return Ok(RemoveOutcome::Declined);
        }
        self.remove(id)?;
        Ok(RemoveOutcome::Removed)
    }

    /// Current records in insertion order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Underlying persistence port.
    pub fn port(&self) -> &P {
        &self.port
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn rejected(&self, op: &str, err: ValidationError) -> StoreError {
        warn!(
            "event=store_{op} module=store status=rejected kind={} field={} reason={}",
            T::KIND,
            err.field(),
            err
        );
        StoreError::Validation(err)
    }

    fn persist(&mut self, op: &str, id: RecordId) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = serde_json::to_string(&self.records)
            .map_err(PersistenceError::Encode)
            .and_then(|snapshot| self.port.save(&self.key, &snapshot));

        match result {
            Ok(()) => {
                info!(
                    "event=store_{op} module=store status=ok kind={} id={} count={} duration_ms={}",
                    T::KIND,
                    id,
                    self.records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_{op} module=store status=error kind={} id={} error_code=persist_failed error={}",
                    T::KIND,
                    id,
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl<T: ListRecord + Toggle, P: PersistencePort> ListStore<T, P> {
    /// Flips the completion state of the record with `id` and persists.
    pub fn toggle(&mut self, id: RecordId) -> StoreResult<T> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.records[index].toggle();
        let record = self.records[index].clone();
        self.persist("toggle", id)?;
        Ok(record)
    }
}
