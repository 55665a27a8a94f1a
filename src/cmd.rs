//! Command handlers.
//!
//! Running without a subcommand opens the board; the only subcommand prints
//! shell completions.

use std::io::{self, Write};

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::board::Board;
use crate::config::Config;
use crate::error::AppError;
use crate::tui::run::run_tui;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the board and, if asked, export the final state.
pub fn cmd_ui(config: &Config) -> Result<(), AppError> {
    let board = run_tui(config)?;
    info!(tasks = board.len(), "board closed");

    if config.print_on_exit {
        export_board(&board, &mut io::stdout().lock())?;
    }
    Ok(())
}

/// Write the board's tasks as pretty JSON.
pub fn export_board<W: Write>(board: &Board, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, board.tasks())?;
    writeln!(out)?;
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
