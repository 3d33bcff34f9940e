//! Record id generation.

use crate::model::record::RecordId;
use chrono::Utc;

/// Millisecond-clock id source that never repeats or goes backwards.
///
/// Ids follow wall-clock time while it advances. When two ids are requested
/// within the same millisecond (or the clock steps back) the next id is
/// `last + 1`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: RecordId,
    clock: fn() -> RecordId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::with_clock(epoch_millis)
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `clock` as the millisecond time source.
    pub fn with_clock(clock: fn() -> RecordId) -> Self {
        Self { last: 0, clock }
    }

    /// Records an id that already exists so later ids stay above it.
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }

    /// Returns a fresh id strictly greater than every id seen so far.
    pub fn next_id(&mut self) -> RecordId {
        let id = (self.clock)().max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

fn epoch_millis() -> RecordId {
    Utc::now().timestamp_millis()
}
