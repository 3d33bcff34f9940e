//! Authoritative in-memory list state.
//!
//! # Responsibility
//! - Own the ordered record list for one storage key.
//! - Write the full list through a `PersistencePort` after every mutation.
//!
//! # Invariants
//! - Record ids are unique and never reassigned.
//! - List order is insertion order; edits never move records.

pub mod ids;
pub mod list_store;
