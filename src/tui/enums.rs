//! Enumerations for TUI state management.

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    /// Navigating cards across the three columns.
    Board,
    /// Typing into the creation form.
    AddTask,
    /// Choosing a new status for the selected card.
    StatusPicker,
    Help,
}
