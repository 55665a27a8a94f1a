//! Color constants for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{Priority, Status};

// Priority badges follow the blue / yellow / red scale of the board.

/// Used for low priority
pub const SKY_BLUE: Color = Color::Rgb(30, 64, 175);
/// Used for medium priority
pub const AMBER: Color = Color::Rgb(146, 64, 14);
/// Used for high priority
pub const DARK_RED: Color = Color::Rgb(153, 27, 27);

/// Card tint for todo
pub const SLATE: Color = Color::Rgb(55, 65, 81);
/// Card tint for in-progress
pub const DARK_PURPLE: Color = Color::Rgb(76, 29, 149);
/// Card tint for completed
pub const DARK_GREEN: Color = Color::Rgb(20, 83, 45);

/// Focus highlight
pub const GOLD: Color = Color::Rgb(255, 215, 0);

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => SKY_BLUE,
        Priority::Medium => AMBER,
        Priority::High => DARK_RED,
    }
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => SLATE,
        Status::InProgress => DARK_PURPLE,
        Status::Completed => DARK_GREEN,
    }
}
