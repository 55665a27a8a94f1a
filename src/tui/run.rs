//! TUI entry point and terminal setup.

use std::io;
use std::panic;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::info;

use crate::board::Board;
use crate::config::Config;
use crate::tui::app::App;

/// Initialise and run the terminal user interface.
/// Returns the board as it stood when the user quit.
pub fn run_tui(config: &Config) -> io::Result<Board> {
    chain_panic_hook(|| {
        let _ = restore_terminal();
    });

    enable_raw_mode()?;
    let mut terminal = match enter_screen() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };

    info!("board opened");
    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    restore_terminal()?;
    terminal.show_cursor()?;

    result?;
    Ok(app.into_board())
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave raw mode and the alternate screen.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Run `restore` before the current panic hook so a panic message lands on
/// a usable terminal.
fn chain_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}
