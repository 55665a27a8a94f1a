//! Task creation form for the terminal user interface.
//!
//! The form owns transient field values only. A successful `submit` hands a
//! `TaskDraft` to the caller and clears itself; an empty title is discarded
//! silently and the typed values stay put.

use crate::{
    fields::Priority,
    task::TaskDraft,
    tui::input::InputField,
};

/// Visual order of the form fields.
pub const TITLE_ORDER: usize = 0;
pub const DESCRIPTION_ORDER: usize = 1;
pub const PRIORITY_ORDER: usize = 2;
pub const ASSIGNEE_ORDER: usize = 3;
const FIELD_COUNT: usize = 4;

/// Creation form state.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub priority: Priority,
    pub assignee: InputField,
    pub current_field: usize,
    default_priority: Priority,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new(Priority::Medium)
    }
}

impl TaskForm {
    /// Create an empty form whose priority starts (and resets) at `default_priority`.
    pub fn new(default_priority: Priority) -> Self {
        let mut form = Self {
            title: InputField::new(),
            description: InputField::new(),
            priority: default_priority,
            assignee: InputField::new(),
            current_field: TITLE_ORDER,
            default_priority,
        };
        form.update_active_field();
        form
    }

    /// Validate and emit a draft, then reset.
    pub fn submit(&mut self) -> Option<TaskDraft> {
        if self.title.value.trim().is_empty() {
            return None;
        }

        let draft = TaskDraft::new(self.title.value.as_str())
            .description(self.description.value.as_str())
            .priority(self.priority)
            .assignee(&self.assignee.value);
        self.reset();
        Some(draft)
    }

    /// Restore every field to its default and focus the title.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.assignee.clear();
        self.priority = self.default_priority;
        self.current_field = TITLE_ORDER;
        self.update_active_field();
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + FIELD_COUNT - 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_ORDER;
        self.description.active = self.current_field == DESCRIPTION_ORDER;
        self.assignee.active = self.current_field == ASSIGNEE_ORDER;
    }

    /// The text input under focus, or `None` on the priority selector.
    pub fn active_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            TITLE_ORDER => Some(&mut self.title),
            DESCRIPTION_ORDER => Some(&mut self.description),
            ASSIGNEE_ORDER => Some(&mut self.assignee),
            _ => None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            field.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_backspace();
        }
    }

    pub fn handle_delete(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_delete();
        }
    }

    /// Move the cursor, or cycle the priority when the selector has focus.
    pub fn handle_left_right(&mut self, right: bool) {
        if self.current_field == PRIORITY_ORDER {
            self.priority = self.priority.cycle(right);
            return;
        }
        if let Some(field) = self.active_input() {
            if right {
                field.move_cursor_right();
            } else {
                field.move_cursor_left();
            }
        }
    }
}
