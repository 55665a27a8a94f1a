//! Task card rendering.
//!
//! A card shows one task: title, description, a priority badge, the assignee
//! when there is one, and the creation date. The last line mirrors the status
//! control so the card reads like its dropdown. Status changes and deletion are
//! routed by the app to the board; the card itself holds no state.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::board::{format_created, truncate};
use crate::task::Task;
use crate::tui::colors::{priority_color, status_color, GOLD};

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Text content of a card for an inner width of `width` columns.
pub fn card_lines(task: &Task, date_format: &str, width: usize) -> Vec<Line<'static>> {
    let title = Line::from(Span::styled(
        truncate(&task.title, width),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let description = Line::from(Span::styled(
        truncate(&task.description, width),
        Style::default().fg(Color::Gray),
    ));

    let mut meta = vec![
        Span::styled(
            format!(" {} ", task.priority.label()),
            Style::default()
                .bg(priority_color(task.priority))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    if let Some(assignee) = &task.assignee {
        meta.push(Span::raw(format!("@{assignee} ")));
    }
    meta.push(Span::raw(format_created(&task.created_at, date_format)));

    let control = Line::from(vec![
        Span::raw("["),
        Span::styled(task.status.title(), Style::default().add_modifier(Modifier::UNDERLINED)),
        Span::raw(" ▾]"),
    ]);

    vec![title, description, Line::from(meta), control]
}

/// Draw a card into `area`, highlighted when selected.
pub fn render_card(f: &mut Frame, area: Rect, task: &Task, is_selected: bool, date_format: &str) {
    let border_style = if is_selected {
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(status_color(task.status)));

    let width = block.inner(area).width as usize;
    let card = Paragraph::new(card_lines(task, date_format, width)).block(block);
    f.render_widget(card, area);
}
