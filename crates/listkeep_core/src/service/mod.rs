//! Use-case services for the expense tracker and the TODO list.
//!
//! # Responsibility
//! - Bind a `ListStore` to its app's record type and storage key.
//! - Expose app-level entry points and presentation summaries.

pub mod expense_service;
pub mod task_service;
