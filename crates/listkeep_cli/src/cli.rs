//! Command-line argument model.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "listkeep", version, about = "Locally persisted expense tracker and TODO list")]
pub struct Cli {
    /// SQLite database file holding all lists.
    #[arg(long, global = true, env = "LISTKEEP_DB_PATH")]
    pub db: Option<PathBuf>,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, global = true, env = "LISTKEEP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "LISTKEEP_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expense tracker.
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// TODO list.
    #[command(subcommand)]
    Task(TaskCommand),
}

#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    List,
    /// Total and per-month breakdown, newest month first.
    Summary,
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    Add {
        text: String,
    },
    Edit {
        id: i64,
        text: String,
    },
    Toggle {
        id: i64,
    },
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    List,
    /// Total / done / pending counts.
    Stats,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub id: i64,
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}
