//! Expense tracker use-cases.
//!
//! # Invariants
//! - All writes go through `ListStore` validation and persistence.
//! - Summaries are recomputed from the current snapshot on every call.

use crate::aggregate::{group_by_month, total, PeriodGroup};
use crate::model::expense::{Expense, ExpenseDraft, ExpensePatch, EXPENSES_STORAGE_KEY};
use crate::model::record::RecordId;
use crate::persist::PersistencePort;
use crate::store::list_store::{ListStore, RemoveOutcome, StoreResult};

/// Totals view for the expense list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary<'a> {
    pub total: f64,
    /// Month groups, newest first.
    pub months: Vec<PeriodGroup<'a, Expense>>,
}

/// Expense tracker facade over a list store.
pub struct ExpenseService<P: PersistencePort> {
    store: ListStore<Expense, P>,
}

impl<P: PersistencePort> ExpenseService<P> {
    /// Creates a service using the default expense storage key.
    pub fn new(port: P) -> Self {
        Self::with_store(ListStore::new(port, EXPENSES_STORAGE_KEY))
    }

    pub fn with_store(store: ListStore<Expense, P>) -> Self {
        Self { store }
    }

    /// Hydrates the list from persistence.
    pub fn open(&mut self) -> StoreResult<usize> {
        self.store.load()
    }

    pub fn add_expense(
        &mut self,
        name: impl Into<String>,
        date: impl Into<String>,
        amount: impl Into<String>,
    ) -> StoreResult<Expense> {
        self.store.add(&ExpenseDraft::new(name, date, amount))
    }

    pub fn update_expense(&mut self, id: RecordId, patch: &ExpensePatch) -> StoreResult<Expense> {
        self.store.edit(id, patch)
    }

    /// Deletes one expense after `confirm` approves it.
    pub fn delete_expense(
        &mut self,
        id: RecordId,
        confirm: impl FnOnce(&Expense) -> bool,
    ) -> StoreResult<RemoveOutcome> {
        self.store.remove_confirmed(id, confirm)
    }

    /// Drops unsaved in-memory state by re-reading persistence.
    pub fn discard_changes(&mut self) -> StoreResult<usize> {
        self.store.reload()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.store.all()
    }

    pub fn summary(&self) -> ExpenseSummary<'_> {
        let expenses = self.store.all();
        ExpenseSummary {
            total: total(expenses),
            months: group_by_month(expenses),
        }
    }

    pub fn store(&self) -> &ListStore<Expense, P> {
        &self.store
    }
}
