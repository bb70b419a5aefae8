use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::model::task::Task;
use crate::util::time::start_of_day_ms;

/// Starter tasks for a first run (no persisted data yet).
pub const STARTER_TASKS: &[&str] = &[
    "Pick up the package",
    "Drink some water",
    "Stop overthinking",
];

/// The board: the ordered task collection plus the ephemeral bits the views
/// need (color filter, single-level undo slot).
///
/// Order is the reorder mechanism — there is no separate position field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub tasks: Vec<Task>,
    /// Active-view color filter. Transient; never persisted, never affects
    /// storage order.
    pub filter: Option<String>,
    /// Id of the most recently completed task, for single-level undo.
    pub last_completed: Option<Uuid>,
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        Board {
            tasks,
            filter: None,
            last_completed: None,
        }
    }

    /// The default first-run board.
    pub fn starter(now_ms: i64) -> Self {
        Board::new(
            STARTER_TASKS
                .iter()
                .map(|text| Task::new((*text).to_string(), None, now_ms))
                .collect(),
        )
    }

    pub fn find(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // Derived views — pure queries over the canonical collection
    // -----------------------------------------------------------------------

    /// Active tasks in storage order, narrowed by the color filter if set.
    pub fn active_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| !t.is_completed)
            .filter(|t| match &self.filter {
                Some(color) => &t.color == color,
                None => true,
            })
            .collect()
    }

    /// Completed tasks in storage order. The filter does not apply here.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_completed).collect()
    }

    /// Completed tasks whose `completed_at` falls within `now`'s local
    /// calendar day.
    pub fn today_completed_count(&self, now: DateTime<Local>) -> usize {
        let start = start_of_day_ms(now);
        self.tasks
            .iter()
            .filter(|t| t.completed_at.is_some_and(|at| at >= start))
            .count()
    }

    pub fn set_filter(&mut self, color: Option<String>) {
        self.filter = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(text: &str, color: &str) -> Task {
        Task::new(text.into(), Some(color), 0)
    }

    #[test]
    fn starter_board_has_one_active_task_per_entry() {
        let board = Board::starter(100);
        assert_eq!(board.tasks.len(), STARTER_TASKS.len());
        assert!(board.tasks.iter().all(|t| !t.is_completed));
        let mut ids: Vec<_> = board.tasks.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), STARTER_TASKS.len());
    }

    #[test]
    fn views_partition_the_collection() {
        let mut board = Board::new(vec![
            task("a", "#FFC8C8"),
            task("b", "#BDE0FE"),
            task("c", "#FFC8C8"),
        ]);
        board.tasks[1].complete(10);

        let active: Vec<_> = board.active_tasks().iter().map(|t| t.text.clone()).collect();
        assert_eq!(active, vec!["a", "c"]);
        let done: Vec<_> = board.completed_tasks().iter().map(|t| t.text.clone()).collect();
        assert_eq!(done, vec!["b"]);
    }

    #[test]
    fn color_filter_narrows_active_only() {
        let mut board = Board::new(vec![
            task("a", "#FFC8C8"),
            task("b", "#BDE0FE"),
            task("c", "#FFC8C8"),
        ]);
        board.tasks[0].complete(10);
        board.set_filter(Some("#FFC8C8".into()));

        let active: Vec<_> = board.active_tasks().iter().map(|t| t.text.clone()).collect();
        assert_eq!(active, vec!["c"]);
        // Completed view ignores the filter
        assert_eq!(board.completed_tasks().len(), 1);
    }

    #[test]
    fn today_count_uses_local_midnight() {
        let noon = Local.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap();
        let midnight = Local.with_ymd_and_hms(2026, 8, 27, 0, 0, 0).unwrap();

        let mut board = Board::new(vec![
            task("today", "#FFC8C8"),
            task("yesterday", "#FFC8C8"),
            task("open", "#FFC8C8"),
        ]);
        board.tasks[0].complete(midnight.timestamp_millis() + 1);
        board.tasks[1].complete(midnight.timestamp_millis() - 1);

        assert_eq!(board.today_completed_count(noon), 1);
    }
}
