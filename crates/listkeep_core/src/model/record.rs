//! Record contracts and shared field validation.
//!
//! # Responsibility
//! - Describe what the generic store needs from a record type.
//! - Normalize raw form input (text, amounts, dates) into typed values.
//!
//! # Invariants
//! - Text fields are stored trimmed and never empty.
//! - Amounts are finite and strictly positive.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Leading numeric prefix accepted for amount input (`12.5`, `.5`, `3e2`, `7kg`).
static AMOUNT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid amount regex")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable record identifier, serialized as a JSON number.
pub type RecordId = i64;

/// Form field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Text,
    Date,
    Amount,
}

impl RecordField {
    /// Stable field name, matching the serialized record key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Text => "text",
            Self::Date => "date",
            Self::Amount => "amount",
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failure for drafts and patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text field is empty after trimming.
    EmptyText(RecordField),
    /// Date is required but was not provided.
    MissingDate,
    /// Date is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Amount does not parse to a finite number.
    NonNumericAmount(String),
    /// Amount parsed but is zero or negative.
    NonPositiveAmount(String),
}

impl ValidationError {
    /// Returns the field that failed validation.
    pub fn field(&self) -> RecordField {
        match self {
            Self::EmptyText(field) => *field,
            Self::MissingDate | Self::InvalidDate(_) => RecordField::Date,
            Self::NonNumericAmount(_) | Self::NonPositiveAmount(_) => RecordField::Amount,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText(field) => write!(f, "{field} must not be empty"),
            Self::MissingDate => write!(f, "date is required"),
            Self::InvalidDate(value) => {
                write!(f, "date `{value}` is not a valid YYYY-MM-DD calendar date")
            }
            Self::NonNumericAmount(value) => write!(f, "amount `{value}` is not a number"),
            Self::NonPositiveAmount(value) => {
                write!(f, "amount `{value}` must be greater than 0")
            }
        }
    }
}

impl Error for ValidationError {}

/// Record type that can live in a `ListStore`.
///
/// `Draft` is raw create input, `Patch` is partial edit input. Both are
/// validated here so the store stays domain-agnostic.
pub trait ListRecord: Clone + Serialize + DeserializeOwned {
    type Draft;
    type Patch;

    /// Short record kind used in log events.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Builds a validated record with the given fresh id.
    fn from_draft(id: RecordId, draft: &Self::Draft) -> Result<Self, ValidationError>;

    /// Returns a copy with the patch applied, or the first validation failure.
    ///
    /// Implementations must keep `id` unchanged.
    fn patched(&self, patch: &Self::Patch) -> Result<Self, ValidationError>;
}

/// Record with a boolean completion state.
pub trait Toggle {
    fn is_done(&self) -> bool;
    fn toggle(&mut self);
}

/// Record carrying a monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Record carrying a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Trims `value` and rejects empty input.
pub fn normalize_text(field: RecordField, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText(field));
    }
    Ok(trimmed.to_string())
}

/// Parses amount input using its leading numeric prefix.
///
/// Trailing non-numeric text is ignored (`"12.50 EUR"` -> `12.5`). Input
/// without a numeric prefix, or that overflows to infinity, is rejected.
pub fn parse_amount(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    let amount = AMOUNT_PREFIX_RE
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ValidationError::NonNumericAmount(trimmed.to_string()))?;

    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(trimmed.to_string()));
    }
    Ok(amount)
}

/// Parses a required `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}
