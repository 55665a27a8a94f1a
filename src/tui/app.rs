//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the board, routes key
//! presses to the form, the cards or the status picker, and renders the
//! screen: the creation form on the left and the three status columns on the
//! right.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::board::{truncate, Board};
use crate::config::Config;
use crate::fields::*;
use crate::task::{Task, TaskId};
use crate::tui::{
    card::{render_card, CARD_HEIGHT},
    colors::{priority_color, status_color, GOLD},
    enums::AppState,
    input::InputField,
    task_form::{TaskForm, ASSIGNEE_ORDER, DESCRIPTION_ORDER, PRIORITY_ORDER, TITLE_ORDER},
    utils::{centered_fixed, centered_rect},
};

/// Main application state for the terminal user interface.
pub struct App {
    state: AppState,
    board: Board,
    task_form: TaskForm,
    selected_status: Status,
    selected_card: usize,
    column_scroll_offsets: [usize; 3],
    picker_index: usize,
    status_message: String,
    date_format: String,
}

impl App {
    /// Create an app with an empty board.
    pub fn new(config: &Config) -> Self {
        App {
            state: AppState::Board,
            board: Board::new(),
            task_form: TaskForm::new(config.default_priority),
            selected_status: Status::Todo,
            selected_card: 0,
            column_scroll_offsets: [0; 3],
            picker_index: 0,
            status_message: String::new(),
            date_format: config.date_format.clone(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the app, handing back the final board.
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Id of the highlighted card, if its column has any.
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.board
            .group_by_status()
            .get(self.selected_status)
            .get(self.selected_card)
            .map(|t| t.id)
    }

    fn selected_task(&self) -> Option<&Task> {
        self.selected_task_id().and_then(|id| self.board.get(id))
    }

    /// Move the highlight onto `id`, wherever it now lives.
    fn select_task(&mut self, id: TaskId) {
        let Some(task) = self.board.get(id) else {
            self.clamp_selection();
            return;
        };
        let status = task.status;
        let position = self
            .board
            .group_by_status()
            .get(status)
            .iter()
            .position(|t| t.id == id);
        self.selected_status = status;
        self.selected_card = position.unwrap_or(0);
    }

    /// Keep the selected card index inside the current column.
    fn clamp_selection(&mut self) {
        let len = self.board.group_by_status().get(self.selected_status).len();
        if len == 0 {
            self.selected_card = 0;
        } else if self.selected_card >= len {
            self.selected_card = len - 1;
        }
    }

    /// Hand the form's draft to the board. Blank titles are dropped silently.
    fn submit_form(&mut self) {
        let Some(draft) = self.task_form.submit() else {
            debug!("submit ignored, empty title");
            return;
        };
        let title = draft.title.clone();
        let id = self.board.add(draft);
        self.select_task(id);
        self.set_status_message(format!("Added '{}'", truncate(&title, 40)));
    }

    /// Set the selected card's status and follow it to its new column.
    fn change_selected_status(&mut self, status: Status) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.board.get(id).map(|t| t.status) == Some(status) {
            return;
        }
        if self.board.change_status(id, status) {
            self.select_task(id);
            self.set_status_message(format!("Moved task to {}", status.title()));
        }
    }

    /// Move the selected card one column left or right.
    fn move_card(&mut self, forward: bool) {
        let index = self.selected_status.index();
        let target = if forward {
            Status::from_index(index + 1)
        } else {
            index.checked_sub(1).and_then(Status::from_index)
        };
        if let Some(status) = target {
            self.change_selected_status(status);
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let title = self.board.get(id).map(|t| t.title.clone()).unwrap_or_default();
        if self.board.delete(id) {
            self.clamp_selection();
            self.set_status_message(format!("Deleted '{}'", truncate(&title, 40)));
        }
    }

    fn open_status_picker(&mut self) {
        if let Some(task) = self.selected_task() {
            self.picker_index = task.status.index();
            self.state = AppState::StatusPicker;
        }
    }

    /// Apply one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.state {
            AppState::Board => self.handle_board_input(key),
            AppState::AddTask => {
                self.handle_form_input(key);
                false
            }
            AppState::StatusPicker => {
                self.handle_picker_input(key.code);
                false
            }
            AppState::Help => {
                self.state = AppState::Board;
                false
            }
        }
    }

    fn handle_board_input(&mut self, key: KeyEvent) -> bool {
        self.clear_status_message();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,

            KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => {
                self.state = AppState::AddTask;
            }

            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_card(false),
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_card(true),

            KeyCode::Left => {
                if let Some(status) = self.selected_status.index().checked_sub(1).and_then(Status::from_index) {
                    self.selected_status = status;
                    self.clamp_selection();
                }
            }
            KeyCode::Right => {
                if let Some(status) = Status::from_index(self.selected_status.index() + 1) {
                    self.selected_status = status;
                    self.clamp_selection();
                }
            }
            KeyCode::Up => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.board.group_by_status().get(self.selected_status).len();
                if self.selected_card + 1 < len {
                    self.selected_card += 1;
                }
            }

            KeyCode::Char('s') | KeyCode::Enter => self.open_status_picker(),
            KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    fn handle_form_input(&mut self, key: KeyEvent) {
        self.clear_status_message();

        match key.code {
            KeyCode::Esc => self.state = AppState::Board,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Home => {
                if let Some(field) = self.task_form.active_input() {
                    field.move_home();
                }
            }
            KeyCode::End => {
                if let Some(field) = self.task_form.active_input() {
                    field.move_end();
                }
            }
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.task_form.handle_char(c);
            }
            _ => {}
        }
    }

    fn handle_picker_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state = AppState::Board,
            KeyCode::Up => self.picker_index = self.picker_index.saturating_sub(1),
            KeyCode::Down => {
                if self.picker_index + 1 < Status::ALL.len() {
                    self.picker_index += 1;
                }
            }
            KeyCode::Enter => {
                self.state = AppState::Board;
                if let Some(status) = Status::from_index(self.picker_index) {
                    self.change_selected_status(status);
                }
            }
            _ => {}
        }
    }

    /// Block for the next terminal event and apply it.
    fn handle_input(&mut self) -> io::Result<bool> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    /// Render the header bar.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled("TASK MANAGEMENT", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} task(s)", self.board.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render one labelled text input, scrolled so the cursor stays visible.
    fn render_input(f: &mut Frame, area: Rect, label: &str, field: &InputField, focused: bool) {
        let style = if focused { Style::default().fg(GOLD) } else { Style::default() };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .border_style(style);
        let offset = field.scroll_offset(block.inner(area).width as usize);
        let input = Paragraph::new(field.value.as_str())
            .block(block)
            .scroll((0, offset as u16));
        f.render_widget(input, area);
    }

    /// Render the creation form panel.
    fn render_task_form(&self, f: &mut Frame, area: Rect) {
        let editing = self.state == AppState::AddTask;
        let panel_style = if editing {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let panel = Block::default()
            .borders(Borders::ALL)
            .title("Add New Task")
            .border_style(panel_style);
        let inner = panel.inner(area);
        f.render_widget(panel, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Priority
                Constraint::Length(3), // Assignee
                Constraint::Min(1),    // Instructions
            ])
            .split(inner);

        let form = &self.task_form;
        let focused = |order: usize| editing && form.current_field == order;

        Self::render_input(f, chunks[0], "Title *", &form.title, focused(TITLE_ORDER));
        Self::render_input(f, chunks[1], "Description", &form.description, focused(DESCRIPTION_ORDER));

        let priority_style = if focused(PRIORITY_ORDER) { Style::default().fg(GOLD) } else { Style::default() };
        let priority = Paragraph::new(Line::from(vec![
            Span::raw("◀ "),
            Span::styled(
                form.priority.label(),
                Style::default().fg(priority_color(form.priority)).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Priority")
                .border_style(priority_style),
        );
        f.render_widget(priority, chunks[2]);

        Self::render_input(f, chunks[3], "Assignee", &form.assignee, focused(ASSIGNEE_ORDER));

        let hint = if editing {
            "Enter: Add Task | Tab: Next field | ←/→: Priority | Esc: Board"
        } else {
            "Press 'a' to add a task"
        };
        let instructions = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, chunks[4]);

        if editing {
            let target = match form.current_field {
                TITLE_ORDER => Some((&form.title, chunks[0])),
                DESCRIPTION_ORDER => Some((&form.description, chunks[1])),
                ASSIGNEE_ORDER => Some((&form.assignee, chunks[3])),
                _ => None,
            };
            if let Some((field, field_area)) = target {
                let width = field_area.width.saturating_sub(2) as usize;
                let column = field.cursor - field.scroll_offset(width);
                let max_x = field_area.right().saturating_sub(2);
                let x = (field_area.x + 1 + column as u16).min(max_x);
                f.set_cursor_position((x, field_area.y + 1));
            }
        }
    }

    /// Render the three status columns.
    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        let columns_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
            .split(area);

        let columns = self.board.group_by_status();
        for (status, lane) in columns.iter() {
            let is_selected = self.state != AppState::AddTask && status == self.selected_status;
            let selected_card = is_selected.then_some(self.selected_card);
            Self::render_column(
                f,
                columns_layout[status.index()],
                status,
                lane,
                selected_card,
                &mut self.column_scroll_offsets[status.index()],
                &self.date_format,
            );
        }
    }

    /// Render a single column and the cards that fit in it.
    fn render_column(
        f: &mut Frame,
        area: Rect,
        status: Status,
        cards: &[&Task],
        selected_card: Option<usize>,
        scroll: &mut usize,
        date_format: &str,
    ) {
        let border_style = if selected_card.is_some() {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::styled(status.title(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(
                    format!("({})", cards.len()),
                    Style::default().bg(status_color(status)).fg(Color::White),
                ),
            ]))
            .border_style(border_style);

        let inner = block.inner(area);
        f.render_widget(block, area);

        if cards.is_empty() {
            *scroll = 0;
            let empty = Paragraph::new("No tasks")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        // An overflowing column gives up its first and last rows to the scroll indicators.
        let overflow = cards.len() * CARD_HEIGHT as usize > inner.height as usize;
        let list = if overflow {
            Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(2),
                ..inner
            }
        } else {
            inner
        };

        let visible = (list.height / CARD_HEIGHT) as usize;
        *scroll = scroll_offset(*scroll, selected_card, visible, cards.len());

        for (slot, (index, task)) in cards.iter().enumerate().skip(*scroll).take(visible).enumerate() {
            let card_area = Rect {
                x: list.x,
                y: list.y + slot as u16 * CARD_HEIGHT,
                width: list.width,
                height: CARD_HEIGHT,
            };
            render_card(f, card_area, task, selected_card == Some(index), date_format);
        }

        if !overflow || inner.height < 2 {
            return;
        }
        let indicator_style = Style::default().fg(Color::Cyan);
        if *scroll > 0 {
            let above = Paragraph::new(format!("▲ +{} above", *scroll)).style(indicator_style);
            f.render_widget(above, Rect { height: 1, ..inner });
        }
        let below = cards.len().saturating_sub(*scroll + visible);
        if below > 0 {
            let indicator = Paragraph::new(format!("▼ +{} below", below)).style(indicator_style);
            f.render_widget(
                indicator,
                Rect { y: inner.bottom() - 1, height: 1, ..inner },
            );
        }
    }

    /// Render the status picker over the board.
    fn render_status_picker(&self, f: &mut Frame, area: Rect) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let popup = centered_fixed(28, Status::ALL.len() as u16 + 4, area);
        f.render_widget(Clear, popup);

        let mut lines = vec![Line::from(Span::styled(
            truncate(&task.title, 24),
            Style::default().add_modifier(Modifier::ITALIC),
        ))];
        for (i, status) in Status::ALL.into_iter().enumerate() {
            let marker = if status == task.status { "•" } else { " " };
            let style = if i == self.picker_index {
                Style::default().bg(GOLD).fg(Color::Black).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("{marker} {}", status.title()), style)));
        }

        let picker = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status")
                .border_style(Style::default().fg(GOLD)),
        );
        f.render_widget(picker, popup);
    }

    /// Render the help overlay.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 60, area);
        f.render_widget(Clear, popup);

        let entry = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("{key:<14}"), Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::raw(what),
            ])
        };
        let text = vec![
            entry("a / n / Tab", "Focus the form"),
            entry("Enter", "Add task (in form) / open status picker"),
            entry("s", "Open status picker"),
            entry("Ctrl+←/→", "Move card to adjacent column"),
            entry("x / Del", "Delete task"),
            entry("←/→ ↑/↓", "Select column / card"),
            entry("Esc", "Leave form or picker, quit from board"),
            entry("q / Ctrl+C", "Quit"),
            Line::from(""),
            Line::from("Press any key to close"),
        ];
        let help = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: false });
        f.render_widget(help, popup);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::Board => format!(
                    "Tasks: {} | a: Add | s: Status | Ctrl+←/→: Move | x: Delete | ?: Help | q: Quit",
                    self.board.len()
                ),
                AppState::AddTask => "Add New Task".to_string(),
                AppState::StatusPicker => "↑/↓: Choose | Enter: Apply | Esc: Cancel".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that lays out the screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Form + board
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(chunks[1]);

        self.render_header(f, chunks[0]);
        self.render_task_form(f, body[0]);
        self.render_board(f, body[1]);
        self.render_status_bar(f, chunks[2]);

        match self.state {
            AppState::StatusPicker => self.render_status_picker(f, body[1]),
            AppState::Help => self.render_help(f, chunks[1]),
            AppState::Board | AppState::AddTask => {}
        }
    }

    /// Main event loop for the TUI application.
    ///
    /// Redraws after every handled event until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// First visible card index so that `selected` stays on screen.
fn scroll_offset(current: usize, selected: Option<usize>, visible: usize, len: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let max_offset = len.saturating_sub(visible);
    let offset = match selected {
        Some(sel) if sel < current => sel,
        Some(sel) if sel >= current + visible => sel + 1 - visible,
        _ => current,
    };
    offset.min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_ctrl(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::CONTROL))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn lane_sizes(app: &App) -> [usize; 3] {
        let columns = app.board().group_by_status();
        Status::ALL.map(|s| columns.get(s).len())
    }

    fn add_task(app: &mut App, title: &str) -> TaskId {
        press(app, KeyCode::Char('a'));
        type_str(app, title);
        press(app, KeyCode::Enter);
        press(app, KeyCode::Esc);
        app.board().tasks().last().unwrap().id
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_write_spec_scenario() {
        let mut app = App::new(&Config::default());

        // Create "Write spec", priority high, no assignee.
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state(), AppState::AddTask);
        type_str(&mut app, "Write spec");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.board().len(), 1);
        assert_eq!(lane_sizes(&app), [1, 0, 0]);
        let task = &app.board().tasks()[0];
        assert_eq!(task.title, "Write spec");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.assignee, None);
        assert_eq!(task.status, Status::Todo);

        // Move it to in-progress through the picker.
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state(), AppState::StatusPicker);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), AppState::Board);
        assert_eq!(lane_sizes(&app), [0, 1, 0]);
        assert_eq!(app.selected_task_id(), Some(task_id(&app)));

        // Delete it.
        press(&mut app, KeyCode::Char('x'));
        assert!(app.board().is_empty());
        assert_eq!(lane_sizes(&app), [0, 0, 0]);
    }

    fn task_id(app: &App) -> TaskId {
        app.board().tasks()[0].id
    }

    #[test]
    fn test_blank_title_submit_is_silent() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.board().is_empty());
        assert_eq!(app.state(), AppState::AddTask);
        assert!(app.status_message.is_empty());
        assert_eq!(app.task_form.title.value, "   ");
    }

    #[test]
    fn test_picker_on_current_status_changes_nothing() {
        let mut app = App::new(&Config::default());
        let id = add_task(&mut app, "one");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board().get(id).unwrap().status, Status::Todo);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_picker_escape_cancels() {
        let mut app = App::new(&Config::default());
        let id = add_task(&mut app, "one");
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::Board);
        assert_eq!(app.board().get(id).unwrap().status, Status::Todo);
    }

    #[test]
    fn test_completed_back_to_todo() {
        let mut app = App::new(&Config::default());
        let id = add_task(&mut app, "one");
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board().get(id).unwrap().status, Status::Completed);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board().get(id).unwrap().status, Status::Todo);
        assert_eq!(app.selected_task_id(), Some(id));
    }

    #[test]
    fn test_ctrl_arrows_move_card() {
        let mut app = App::new(&Config::default());
        let id = add_task(&mut app, "one");

        press_ctrl(&mut app, KeyCode::Left);
        assert_eq!(app.board().get(id).unwrap().status, Status::Todo);

        press_ctrl(&mut app, KeyCode::Right);
        press_ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.board().get(id).unwrap().status, Status::Completed);
        press_ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.board().get(id).unwrap().status, Status::Completed);
        assert_eq!(lane_sizes(&app), [0, 0, 1]);
    }

    #[test]
    fn test_delete_clamps_selection_and_keeps_order() {
        let mut app = App::new(&Config::default());
        let first = add_task(&mut app, "first");
        let second = add_task(&mut app, "second");
        let third = add_task(&mut app, "third");

        assert_eq!(app.selected_task_id(), Some(third));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_task_id(), Some(second));
        press(&mut app, KeyCode::Delete);

        let remaining: Vec<TaskId> = app.board().tasks().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![first, third]);
        assert_eq!(app.selected_task_id(), Some(third));

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.selected_task_id(), Some(first));
    }

    #[test]
    fn test_empty_column_ignores_card_actions() {
        let mut app = App::new(&Config::default());
        add_task(&mut app, "one");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_task_id(), None);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state(), AppState::Board);
        assert_eq!(app.board().len(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.task_form.title.value, "q");
        assert!(press_ctrl(&mut app, KeyCode::Char('c')));

        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state(), AppState::Help);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state(), AppState::Board);
    }

    #[test]
    fn test_render_shows_columns_and_card() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Write spec");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "outline first");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        let text = screen(&mut app);
        assert!(text.contains("TASK MANAGEMENT"));
        assert!(text.contains("To Do (1)"));
        assert!(text.contains("In Progress (0)"));
        assert!(text.contains("Completed (0)"));
        assert!(text.contains("Write spec"));
        assert!(text.contains("outline first"));
        assert!(text.contains("@Ada"));
        assert!(text.contains("[To Do ▾]"));
        assert!(text.contains("Add New Task"));
    }

    #[test]
    fn test_render_status_picker() {
        let mut app = App::new(&Config::default());
        add_task(&mut app, "one");
        press(&mut app, KeyCode::Char('s'));
        let text = screen(&mut app);
        assert!(text.contains("• To Do"));
        assert!(text.contains("  In Progress"));
    }

    fn screen_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_long_title_scrolls_to_keep_typing_visible() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Write the specification for board ZZZ");

        let text = screen_sized(&mut app, 80, 24);
        assert!(text.contains("board ZZZ"));
        assert!(!text.contains("Write the"));

        press(&mut app, KeyCode::Home);
        let text = screen_sized(&mut app, 80, 24);
        assert!(text.contains("Write the"));
        assert!(!text.contains("ZZZ"));
    }

    #[test]
    fn test_column_scroll_indicators() {
        let mut app = App::new(&Config::default());
        for i in 0..7 {
            add_task(&mut app, &format!("task {i}"));
        }

        // 34 inner rows: indicators take two, leaving room for five cards.
        let text = screen(&mut app);
        assert!(text.contains("▲ +2 above"));
        assert!(!text.contains("below"));
        assert!(text.contains("task 6"));
        assert!(!text.contains("task 1"));

        for _ in 0..6 {
            press(&mut app, KeyCode::Up);
        }
        let text = screen(&mut app);
        assert!(text.contains("▼ +2 below"));
        assert!(!text.contains("above"));
        assert!(text.contains("task 0"));
        assert!(!text.contains("task 5"));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, Some(0), 3, 10), 0);
        assert_eq!(scroll_offset(0, Some(4), 3, 10), 2);
        assert_eq!(scroll_offset(5, Some(2), 3, 10), 2);
        assert_eq!(scroll_offset(9, None, 3, 10), 7);
        assert_eq!(scroll_offset(4, Some(1), 0, 10), 0);
    }
}
