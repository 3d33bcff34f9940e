//! Command execution against a persistence port.

use crate::cli::{Cli, Command, ExpenseCommand, RemoveArgs, TaskCommand};
use crate::render;
use anyhow::{bail, Context, Result};
use chrono::Local;
use listkeep_core::db::open_db;
use listkeep_core::{
    default_log_level, init_logging, ExpensePatch, ExpenseService, PersistencePort, RemoveOutcome,
    SqliteKvStore, StoreError, StoreResult, TaskService,
};
use log::warn;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "listkeep.sqlite3";

/// Runs one parsed command and returns the text to print.
///
/// `confirm` is asked before destructive operations unless `--yes` is set.
pub fn run(cli: Cli, confirm: impl FnMut(&str) -> bool) -> Result<String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let db_path = resolve_db_path(cli.db);
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open database `{}`", db_path.display()))?;
    let port = SqliteKvStore::try_new(&conn).context("database is not ready")?;

    match cli.command {
        Command::Expense(command) => run_expense(port, command, confirm),
        Command::Task(command) => run_task(port, command, confirm),
    }
}

pub fn run_expense<P: PersistencePort>(
    port: P,
    command: ExpenseCommand,
    mut confirm: impl FnMut(&str) -> bool,
) -> Result<String> {
    let mut service = ExpenseService::new(port);
    hydrate(service.open())?;

    let output = match command {
        ExpenseCommand::Add { name, amount, date } => {
            let date = date.unwrap_or_else(today);
            let expense = service.add_expense(name, date, amount)?;
            format!("Added expense {}.\n", expense.id)
        }
        ExpenseCommand::Edit {
            id,
            name,
            amount,
            date,
        } => {
            if name.is_none() && amount.is_none() && date.is_none() {
                bail!("nothing to change; pass --name, --amount or --date");
            }
            let patch = ExpensePatch { name, date, amount };
            let expense = service.update_expense(id, &patch)?;
            format!("Updated expense {}.\n{}\n", expense.id, render::expense_line(&expense))
        }
        ExpenseCommand::Remove(RemoveArgs { id, yes }) => {
            let outcome = service.delete_expense(id, |expense| {
                yes || confirm(&format!("Delete expense `{}`?", expense.name))
            })?;
            removal_message("expense", id, outcome)
        }
        ExpenseCommand::List => render::expense_list(service.expenses()),
        ExpenseCommand::Summary => render::summary(&service.summary()),
    };
    Ok(output)
}

pub fn run_task<P: PersistencePort>(
    port: P,
    command: TaskCommand,
    mut confirm: impl FnMut(&str) -> bool,
) -> Result<String> {
    let mut service = TaskService::new(port);
    hydrate(service.open())?;

    let output = match command {
        TaskCommand::Add { text } => {
            let task = service.add_task(text)?;
            format!("Added task {}.\n", task.id)
        }
        TaskCommand::Edit { id, text } => {
            let task = service.rename_task(id, text)?;
            format!("Updated task {}.\n{}\n", task.id, render::task_line(&task))
        }
        TaskCommand::Toggle { id } => {
            let task = service.toggle_task(id)?;
            format!("{}\n", render::task_line(&task))
        }
        TaskCommand::Remove(RemoveArgs { id, yes }) => {
            let Some(task) = service.tasks().iter().find(|task| task.id == id) else {
                service.delete_task(id)?;
                return Ok(removal_message("task", id, RemoveOutcome::Absent));
            };
            if !yes && !confirm(&format!("Delete task `{}`?", task.text)) {
                return Ok(removal_message("task", id, RemoveOutcome::Declined));
            }
            service.delete_task(id)?;
            removal_message("task", id, RemoveOutcome::Removed)
        }
        TaskCommand::List => render::task_list(service.tasks()),
        TaskCommand::Stats => render::stats(&service.stats()),
    };
    Ok(output)
}

/// Treats a corrupt stored list as empty, after warning about it.
fn hydrate(loaded: StoreResult<usize>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(err @ StoreError::CorruptData { .. }) => {
            warn!("event=cli_load module=cli status=corrupt error={err}");
            eprintln!("warning: {err}; starting with an empty list");
            Ok(())
        }
        Err(err) => Err(err).context("failed to load list"),
    }
}

fn removal_message(kind: &str, id: i64, outcome: RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed => format!("Deleted {kind} {id}.\n"),
        RemoveOutcome::Absent => format!("No {kind} with id {id}; nothing deleted.\n"),
        RemoveOutcome::Declined => "Cancelled.\n".to_string(),
    }
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
}
