//! TODO list use-cases.

use crate::aggregate::{counts, Counts};
use crate::model::record::{RecordId, Toggle};
use crate::model::task::{Task, TaskDraft, TaskPatch, TASKS_STORAGE_KEY};
use crate::persist::PersistencePort;
use crate::store::list_store::{ListStore, StoreResult};

/// TODO list facade over a list store.
pub struct TaskService<P: PersistencePort> {
    store: ListStore<Task, P>,
}

impl<P: PersistencePort> TaskService<P> {
    /// Creates a service using the default task storage key.
    pub fn new(port: P) -> Self {
        Self::with_store(ListStore::new(port, TASKS_STORAGE_KEY))
    }

    pub fn with_store(store: ListStore<Task, P>) -> Self {
        Self { store }
    }

    pub fn open(&mut self) -> StoreResult<usize> {
        self.store.load()
    }

    pub fn add_task(&mut self, text: impl Into<String>) -> StoreResult<Task> {
        self.store.add(&TaskDraft::new(text))
    }

    /// Replaces the task text. Blank text is rejected and the old text kept.
    pub fn rename_task(&mut self, id: RecordId, text: impl Into<String>) -> StoreResult<Task> {
        let patch = TaskPatch {
            text: Some(text.into()),
        };
        self.store.edit(id, &patch)
    }

    pub fn toggle_task(&mut self, id: RecordId) -> StoreResult<Task> {
        self.store.toggle(id)
    }

    /// Deletes a task without confirmation; missing ids are ignored.
    pub fn delete_task(&mut self, id: RecordId) -> StoreResult<bool> {
        self.store.remove(id)
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.all()
    }

    /// Total / done / pending tallies.
    pub fn stats(&self) -> Counts {
        counts(self.store.all(), Task::is_done)
    }

    pub fn store(&self) -> &ListStore<Task, P> {
        &self.store
    }
}
