//! The board controller and display helpers.
//!
//! `Board` is the single owner of the task collection. Every mutation goes
//! through `add`, `change_status` or `delete`; the per-column view is derived
//! on demand by `group_by_status` and never stored.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::fields::*;
use crate::task::{Task, TaskDraft, TaskId};

/// In-memory task collection in insertion order.
#[derive(Debug, Default)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete a draft and append it as a new `Todo` task.
    pub fn add(&mut self, draft: TaskDraft) -> TaskId {
        self.add_at(draft, Local::now())
    }

    /// Same as [`Board::add`] with an explicit creation time.
    pub fn add_at(&mut self, draft: TaskDraft, created_at: DateTime<Local>) -> TaskId {
        let id = self.fresh_id();
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            assignee: draft.assignee,
            status: Status::Todo,
            created_at,
        };
        info!(task_id = %id, title = %task.title, priority = task.priority.label(), "task added");
        self.tasks.push(task);
        id
    }

    /// Set the status of the task with `id`.
    ///
    /// Returns `false` without touching anything when no task matches.
    pub fn change_status(&mut self, id: TaskId, status: Status) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                let from = task.status;
                task.status = status;
                info!(task_id = %id, from = from.label(), to = status.label(), "status changed");
                true
            }
            None => {
                debug!(task_id = %id, "status change ignored, no such task");
                false
            }
        }
    }

    /// Remove the task with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!(task_id = %id, "task deleted");
        } else {
            debug!(task_id = %id, "delete ignored, no such task");
        }
        removed
    }

    /// Partition the collection into the three status columns.
    pub fn group_by_status(&self) -> Columns<'_> {
        let mut columns = Columns::default();
        for task in &self.tasks {
            columns.lanes[task.status.index()].push(task);
        }
        columns
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// An id not used by any task currently on the board.
    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

/// Tasks grouped by status, each lane in board order.
#[derive(Debug, Default)]
pub struct Columns<'a> {
    lanes: [Vec<&'a Task>; 3],
}

impl<'a> Columns<'a> {
    pub fn get(&self, status: Status) -> &[&'a Task] {
        &self.lanes[status.index()]
    }

    /// Lanes in column order, paired with their status.
    pub fn iter(&self) -> impl Iterator<Item = (Status, &[&'a Task])> + '_ {
        Status::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Format a creation timestamp with a strftime pattern.
pub fn format_created(created_at: &DateTime<Local>, date_format: &str) -> String {
    created_at.format(date_format).to_string()
}

/// Truncate a string to `width` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_board() -> (Board, Vec<TaskId>) {
        let mut board = Board::new();
        let ids = vec![
            board.add(TaskDraft::new("first").priority(Priority::Low)),
            board.add(TaskDraft::new("second").assignee("Ada")),
            board.add(TaskDraft::new("third").priority(Priority::High).description("d")),
        ];
        (board, ids)
    }

    #[test]
    fn test_add_appends_todo_with_unique_id() {
        let (mut board, ids) = sample_board();
        let id = board.add(TaskDraft::new("fourth"));

        assert_eq!(board.len(), 4);
        assert!(!ids.contains(&id));
        let task = board.get(id).unwrap();
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.title, "fourth");
        assert_eq!(board.tasks().last().unwrap().id, id);
    }

    #[test]
    fn test_add_at_keeps_timestamp() {
        let mut board = Board::new();
        let when = Local.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let id = board.add_at(TaskDraft::new("dated"), when);
        assert_eq!(board.get(id).unwrap().created_at, when);
        assert_eq!(format_created(&when, "%Y-%m-%d"), "2024-03-09");
        assert_eq!(format_created(&when, "%-m/%-d/%Y"), "3/9/2024");
    }

    #[rstest]
    #[case(Status::Todo)]
    #[case(Status::InProgress)]
    #[case(Status::Completed)]
    fn test_change_status_only_touches_target(#[case] status: Status) {
        let (mut board, ids) = sample_board();
        let before: Vec<Task> = board.tasks().to_vec();

        assert!(board.change_status(ids[1], status));

        for (old, new) in before.iter().zip(board.tasks()) {
            if old.id == ids[1] {
                let mut expected = old.clone();
                expected.status = status;
                assert_eq!(new, &expected);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_change_status_unknown_id_is_noop() {
        let (mut board, _) = sample_board();
        let before: Vec<Task> = board.tasks().to_vec();
        assert!(!board.change_status(TaskId::new(), Status::Completed));
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_any_transition_is_allowed() {
        let (mut board, ids) = sample_board();
        assert!(board.change_status(ids[0], Status::Completed));
        assert!(board.change_status(ids[0], Status::Todo));
        assert_eq!(board.get(ids[0]).unwrap().status, Status::Todo);
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let (mut board, ids) = sample_board();
        assert!(board.delete(ids[1]));

        let remaining: Vec<TaskId> = board.tasks().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
        assert!(board.get(ids[1]).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (mut board, _) = sample_board();
        let before: Vec<Task> = board.tasks().to_vec();
        assert!(!board.delete(TaskId::new()));
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_group_by_status_is_exhaustive_and_disjoint() {
        let (mut board, ids) = sample_board();
        let extra = board.add(TaskDraft::new("fourth"));
        board.change_status(ids[0], Status::Completed);
        board.change_status(extra, Status::InProgress);
        board.change_status(ids[2], Status::Completed);

        let columns = board.group_by_status();
        let mut seen: Vec<TaskId> = Vec::new();
        for (status, lane) in columns.iter() {
            for task in lane {
                assert_eq!(task.status, status);
                seen.push(task.id);
            }
        }
        assert_eq!(seen.len(), board.len());
        for task in board.tasks() {
            assert_eq!(seen.iter().filter(|&&id| id == task.id).count(), 1);
        }

        let completed: Vec<TaskId> = columns.get(Status::Completed).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![ids[0], ids[2]]);
        assert_eq!(columns.get(Status::Todo).len(), 1);
    }

    #[test]
    fn test_group_by_status_on_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        for (_, lane) in board.group_by_status().iter() {
            assert!(lane.is_empty());
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 6), "a lon…");
        assert_eq!(truncate("héllo wörld", 5), "héll…");
        assert_eq!(truncate("abc", 0), "");
    }
}
