use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::palette;

/// A single sticky-note task.
///
/// The serialized shape uses camelCase field names and omits `completedAt`
/// when unset — the same record layout the backup files use, so persisted
/// tasks and export snapshots share one schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    /// User-visible label
    pub text: String,
    /// Palette key; unknown keys fall back to the default style at read time
    pub color: String,
    /// Creation time, milliseconds since epoch
    pub created_at: i64,
    /// Completion time; `Some` iff the task is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default)]
    pub is_completed: bool,
    /// Small random tilt in degrees, [-3, +3). Cosmetic only.
    #[serde(default)]
    pub rotation: f64,
}

impl Task {
    /// Create a fresh active task. Picks a random color when none is given.
    pub fn new(text: String, color: Option<&str>, now_ms: i64) -> Self {
        Task {
            id: Uuid::new_v4(),
            text,
            color: color
                .map(|c| c.to_string())
                .unwrap_or_else(palette::random_color),
            created_at: now_ms,
            completed_at: None,
            is_completed: false,
            rotation: palette::random_rotation(),
        }
    }

    /// Mark completed. Re-completing just refreshes the timestamp.
    pub fn complete(&mut self, now_ms: i64) {
        self.is_completed = true;
        self.completed_at = Some(now_ms);
    }

    /// Clear completion. No other field changes.
    pub fn restore(&mut self) {
        self.is_completed = false;
        self.completed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_active() {
        let task = Task::new("water the plants".into(), None, 1000);
        assert!(!task.is_completed);
        assert!(task.completed_at.is_none());
        assert_eq!(task.created_at, 1000);
        assert!(task.rotation >= -3.0 && task.rotation < 3.0);
        assert!(palette::is_valid_color(&task.color));
    }

    #[test]
    fn new_task_keeps_explicit_color() {
        let task = Task::new("x".into(), Some("#BDE0FE"), 0);
        assert_eq!(task.color, "#BDE0FE");
    }

    #[test]
    fn complete_then_restore_round_trips() {
        let mut task = Task::new("x".into(), None, 5);
        let before = task.clone();
        task.complete(99);
        assert!(task.is_completed);
        assert_eq!(task.completed_at, Some(99));
        task.restore();
        assert_eq!(task, before);
    }

    #[test]
    fn serde_uses_camel_case_and_omits_unset_completion() {
        let task = Task::new("hello".into(), Some("#FFC8C8"), 42);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\":42"));
        assert!(json.contains("\"isCompleted\":false"));
        assert!(!json.contains("completedAt"));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn serde_defaults_for_optional_fields() {
        let json = format!(
            r##"{{"id":"{}","text":"t","color":"#FDFD96","createdAt":7}}"##,
            Uuid::new_v4()
        );
        let task: Task = serde_json::from_str(&json).unwrap();
        assert!(!task.is_completed);
        assert!(task.completed_at.is_none());
        assert_eq!(task.rotation, 0.0);
    }
}
