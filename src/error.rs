//! Application error type.
//!
//! Board operations are total and never fail; these errors come from the
//! terminal, the optional log file and startup configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or event reading failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to initialise tracing subscriber: {0}")]
    Tracing(String),

    /// The strftime pattern given for card dates does not parse.
    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("failed to export board: {0}")]
    Export(#[from] serde_json::Error),
}
