//! Validated runtime settings resolved from the command line and environment.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

use crate::cli::Cli;
use crate::error::AppError;
use crate::fields::Priority;

/// Settings the UI and `main` need once arguments have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub date_format: String,
    pub default_priority: Priority,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
    pub print_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            default_priority: Priority::Medium,
            log_file: None,
            verbose: false,
            print_on_exit: false,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        validate_date_format(&cli.date_format)?;
        Ok(Self {
            date_format: cli.date_format.clone(),
            default_priority: cli.default_priority,
            log_file: cli.log_file.clone(),
            verbose: cli.verbose,
            print_on_exit: cli.print_on_exit,
        })
    }
}

/// Reject patterns chrono would render as an error at draw time.
///
/// Some specifiers parse but cannot be formatted (`%#z`), so a sample
/// timestamp is rendered as well.
pub fn validate_date_format(pattern: &str) -> Result<(), AppError> {
    let invalid = || AppError::InvalidDateFormat(pattern.to_string());
    if pattern.trim().is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let mut sample = String::new();
    write!(&mut sample, "{}", Local::now().format(pattern)).map_err(|_| invalid())?;
    Ok(())
}
