use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::Priority;

/// In-memory task board for the terminal.
/// Tasks live only for the current session.
#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Terminal task board")]
pub struct Cli {
    /// strftime pattern used for card creation dates.
    #[arg(long, env = "TASKBOARD_DATE_FORMAT", default_value = "%-m/%-d/%Y")]
    pub date_format: String,

    /// Priority the creation form starts with and resets to.
    #[arg(long, value_enum, default_value_t = Priority::Medium)]
    pub default_priority: Priority,

    /// Write tracing output to this file.
    #[arg(long, env = "TASKBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level instead of info.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the final board as JSON on stdout when the UI closes.
    #[arg(long)]
    pub print_on_exit: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
