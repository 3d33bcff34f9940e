//! Record model shared by the expense and task lists.
//!
//! # Responsibility
//! - Define the record types held by `ListStore`.
//! - Own field-level validation for user-supplied drafts and patches.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` that never changes.
//! - A record value only exists after its draft passed validation.

pub mod expense;
pub mod record;
pub mod task;
