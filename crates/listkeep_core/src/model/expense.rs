//! Expense record for the expense tracker list.
//!
//! # Responsibility
//! - Define the persisted expense shape (`id`, `name`, `date`, `amount`).
//! - Validate create drafts and edit patches.
//!
//! # Invariants
//! - `name` is trimmed and non-empty.
//! - `amount` is finite and greater than zero.
//! - `date` serializes as `YYYY-MM-DD`.

use crate::model::record::{
    normalize_text, parse_amount, parse_date, Amounted, Dated, ListRecord, RecordField, RecordId,
    ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage key used by the expense tracker.
pub const EXPENSES_STORAGE_KEY: &str = "expenseTrackerData";

/// One tracked expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub name: String,
    pub date: NaiveDate,
    pub amount: f64,
}

/// Raw create input, one string per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub date: String,
    pub amount: String,
}

impl ExpenseDraft {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            amount: amount.into(),
        }
    }
}

/// Partial edit input. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub amount: Option<String>,
}

impl ListRecord for Expense {
    type Draft = ExpenseDraft;
    type Patch = ExpensePatch;

    const KIND: &'static str = "expense";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: &ExpenseDraft) -> Result<Self, ValidationError> {
        // Field order matches the form: name, date, then amount.
        let name = normalize_text(RecordField::Name, &draft.name)?;
        let date = parse_date(&draft.date)?;
        let amount = parse_amount(&draft.amount)?;
        Ok(Self {
            id,
            name,
            date,
            amount,
        })
    }

    fn patched(&self, patch: &ExpensePatch) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = normalize_text(RecordField::Name, name)?;
        }
        if let Some(date) = &patch.date {
            next.date = parse_date(date)?;
        }
        if let Some(amount) = &patch.amount {
            next.amount = parse_amount(amount)?;
        }
        Ok(next)
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
