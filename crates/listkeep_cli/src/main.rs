//! `listkeep` command-line front end.
//!
//! # Responsibility
//! - Expose the expense tracker and TODO list over a SQLite database.
//! - Keep presentation (text output, prompts) out of `listkeep_core`.

mod cli;
mod commands;
mod render;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match commands::run(cli, confirm_on_stdin) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn confirm_on_stdin(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
