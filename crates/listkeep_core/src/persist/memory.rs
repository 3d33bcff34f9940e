//! In-process key-value store with an optional byte quota.

use crate::persist::{PersistenceError, PersistencePort, PersistenceResult};
use std::collections::HashMap;

/// Map-backed port, used for tests and ephemeral sessions.
///
/// With a quota set, a write fails once the summed length of all keys and
/// values would exceed it, and the previous value is kept.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    writes: usize,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes beyond `quota_bytes` in total.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Number of successful `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw stored value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Total bytes held across all keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl PersistencePort for MemoryKvStore {
    fn load(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, snapshot: &str) -> PersistenceResult<()> {
        if let Some(quota_bytes) = self.quota_bytes {
            let replaced = self.get(key).map_or(0, |old| key.len() + old.len());
            let required_bytes = self.used_bytes() - replaced + key.len() + snapshot.len();
            if required_bytes > quota_bytes {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    required_bytes,
                    quota_bytes,
                });
            }
        }

        self.entries.insert(key.to_string(), snapshot.to_string());
        self.writes += 1;
        Ok(())
    }
}
