//! Derived read-only views over a record snapshot.
//!
//! # Responsibility
//! - Compute totals, period groups and tallies for presentation.
//!
//! # Invariants
//! - Functions are pure: they borrow the snapshot, never mutate it, and keep
//!   no state between calls.
//! - Groups are recomputed from scratch on every call.

use crate::model::record::{Amounted, Dated};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One bucket of records sharing a group key.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodGroup<'a, T> {
    pub key: String,
    /// Members in snapshot order.
    pub records: Vec<&'a T>,
    pub total: f64,
}

/// Record tallies for a predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub matching: usize,
    pub non_matching: usize,
}

impl Counts {
    /// Alias of `matching` when the predicate is "is done".
    pub fn done(&self) -> usize {
        self.matching
    }

    /// Alias of `non_matching` when the predicate is "is done".
    pub fn pending(&self) -> usize {
        self.non_matching
    }
}

/// Sum of all amounts; `0.0` for an empty snapshot.
pub fn total<T: Amounted>(records: &[T]) -> f64 {
    records.iter().map(|record| record.amount()).sum()
}

/// Buckets records by `key_fn`, most recent key first.
///
/// Keys compare as strings, so they must sort chronologically
/// (`YYYY-MM` does).
pub fn group_by_period<'a, T, F>(records: &'a [T], key_fn: F) -> Vec<PeriodGroup<'a, T>>
where
    T: Amounted,
    F: Fn(&T) -> String,
{
    let mut buckets: BTreeMap<String, (Vec<&'a T>, f64)> = BTreeMap::new();
    for record in records {
        let (members, sum) = buckets.entry(key_fn(record)).or_default();
        members.push(record);
        *sum += record.amount();
    }

    buckets
        .into_iter()
        .rev()
        .map(|(key, (records, total))| PeriodGroup {
            key,
            records,
            total,
        })
        .collect()
}

/// Groups dated records by calendar month (`YYYY-MM`).
pub fn group_by_month<T: Amounted + Dated>(records: &[T]) -> Vec<PeriodGroup<'_, T>> {
    group_by_period(records, |record| month_key(record.date()))
}

/// Year-month group key, e.g. `2025-10`.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Counts records overall and split by `predicate`.
pub fn counts<T, F>(records: &[T], predicate: F) -> Counts
where
    F: Fn(&T) -> bool,
{
    let matching = records.iter().filter(|record| predicate(*record)).count();
    Counts {
        total: records.len(),
        matching,
        non_matching: records.len() - matching,
    }
}
