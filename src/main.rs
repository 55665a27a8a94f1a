//! # taskboard - In-memory task board for the terminal
//!
//! Create tasks with a title, description, priority and optional assignee,
//! then move them across three fixed columns: To Do, In Progress and
//! Completed. Everything lives in memory for the current session.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the board
//! taskboard
//!
//! # Show ISO dates on cards and start the form at high priority
//! taskboard --date-format %Y-%m-%d --default-priority high
//!
//! # Dump the session as JSON when quitting
//! taskboard --print-on-exit > session.json
//!
//! # Trace board mutations to a file
//! taskboard --log-file taskboard.log -v
//! ```
//!
//! ## Keys
//!
//! - `a` focus the form, `Enter` add the task, `Esc` back to the board
//! - arrows select a card, `s` open the status picker, `Ctrl+←/→` move a card
//! - `x` delete the selected card, `?` help, `q` quit

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod board;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod fields;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod card;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use config::Config;
use error::AppError;

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        cmd_completions(*shell);
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("taskboard error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::from_cli(cli)?;
    if let Some(path) = config.log_file.as_deref() {
        init_tracing(path, config.verbose)?;
    }
    cmd_ui(&config)
}

/// Send tracing output to `path`. The terminal belongs to the UI, so nothing
/// is written to stderr.
fn init_tracing(path: &Path, verbose: bool) -> Result<(), AppError> {
    let level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_env("TASKBOARD_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|error| AppError::Tracing(error.to_string()))?;

    Ok(())
}
