//! Core logic for listkeep: locally persisted CRUD lists.
//! This crate owns record validation, list state and derived views.

pub mod aggregate;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use aggregate::{counts, group_by_month, group_by_period, month_key, total, Counts, PeriodGroup};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::expense::{Expense, ExpenseDraft, ExpensePatch, EXPENSES_STORAGE_KEY};
pub use model::record::{
    Amounted, Dated, ListRecord, RecordField, RecordId, Toggle, ValidationError,
};
pub use model::task::{Task, TaskDraft, TaskPatch, TASKS_STORAGE_KEY};
pub use persist::{
    MemoryKvStore, PersistenceError, PersistencePort, PersistenceResult, SqliteKvStore,
};
pub use service::expense_service::{ExpenseService, ExpenseSummary};
pub use service::task_service::TaskService;
pub use store::ids::IdGenerator;
pub use store::list_store::{ListStore, RemoveOutcome, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
