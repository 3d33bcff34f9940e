//! Plain-text rendering of records and summaries.

use chrono::NaiveDate;
use listkeep_core::{Counts, Expense, ExpenseSummary, Task};
use std::fmt::Write;

/// `2025-10` -> `October 2025`. Unparseable keys are returned unchanged.
pub fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

/// `2025-10-28` -> `28.10.2025`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}

pub fn expense_line(expense: &Expense) -> String {
    format!(
        "{:>15}  {}  {:>10}  {}",
        expense.id,
        display_date(expense.date),
        amount(expense.amount),
        expense.name
    )
}

pub fn task_line(task: &Task) -> String {
    let mark = if task.done { 'x' } else { ' ' };
    format!("{:>15}  [{mark}] {}", task.id, task.text)
}

pub fn expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n".to_string();
    }
    expenses.iter().fold(String::new(), |mut out, expense| {
        let _ = writeln!(out, "{}", expense_line(expense));
        out
    })
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet. Add one to get started!\n".to_string();
    }
    tasks.iter().fold(String::new(), |mut out, task| {
        let _ = writeln!(out, "{}", task_line(task));
        out
    })
}

pub fn summary(summary: &ExpenseSummary<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total: {}", amount(summary.total));
    for month in &summary.months {
        let _ = writeln!(
            out,
            "\n{} ({} item(s), {})",
            month_label(&month.key),
            month.records.len(),
            amount(month.total)
        );
        for expense in &month.records {
            let _ = writeln!(out, "{}", expense_line(expense));
        }
    }
    out
}

pub fn stats(counts: &Counts) -> String {
    format!(
        "Total: {}  Done: {}  Pending: {}\n",
        counts.total,
        counts.done(),
        counts.pending()
    )
}
