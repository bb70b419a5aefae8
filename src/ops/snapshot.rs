use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::board::Board;
use crate::model::settings::Settings;
use crate::model::task::Task;

/// Error type for snapshot imports. Anything wrong with the document
/// rejects the whole import; the live board is never partially updated.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid format: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid backup: {0}")]
    Invalid(String),
}

/// The backup interchange document. `tasks` is required; the rest is
/// optional on import and always present on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Append imported tasks; on id collision the existing task wins.
    Merge,
    /// Replace the collection wholesale (last-write-wins).
    Overwrite,
}

impl ImportMode {
    pub fn parse(s: &str) -> Option<ImportMode> {
        match s {
            "merge" => Some(ImportMode::Merge),
            "overwrite" => Some(ImportMode::Overwrite),
            _ => None,
        }
    }
}

/// What an import did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub mode: ImportMode,
    /// Tasks added to (or kept in) the collection from the document
    pub added: usize,
    /// Imported duplicates dropped in favor of existing tasks
    pub skipped: usize,
}

/// Point-in-time copy of the board plus auxiliary settings. Owns its data:
/// later board mutations cannot reach into an exported snapshot.
pub fn export_snapshot(board: &Board, settings: &Settings, now_ms: i64) -> Snapshot {
    Snapshot {
        title: Some(settings.title.clone()),
        tasks: board.tasks.clone(),
        sound_enabled: Some(settings.sound_enabled),
        exported_at: Some(now_ms),
    }
}

/// Parse and validate a backup document. Malformed JSON, a missing or
/// wrongly-typed `tasks` array, any task record that fails validation,
/// duplicate ids, or a completion flag that disagrees with its timestamp
/// all reject the document.
pub fn parse_snapshot(text: &str) -> Result<Snapshot, ImportError> {
    let snapshot: Snapshot = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    for task in &snapshot.tasks {
        if !seen.insert(task.id) {
            return Err(ImportError::Invalid(format!("duplicate task id {}", task.id)));
        }
        if task.is_completed != task.completed_at.is_some() {
            return Err(ImportError::Invalid(format!(
                "task {} completion flag does not match its timestamp",
                task.id
            )));
        }
    }
    Ok(snapshot)
}

/// Apply a validated snapshot to the live board and settings.
///
/// Overwrite replaces the collection and adopts title/sound when present;
/// it also resets the filter and undo slot, which may refer to tasks that
/// no longer exist. Merge appends imported tasks in document order,
/// dropping any whose id already exists locally so local edits are never
/// clobbered silently; settings are left alone.
pub fn apply_snapshot(
    board: &mut Board,
    settings: &mut Settings,
    snapshot: Snapshot,
    mode: ImportMode,
) -> ImportReport {
    match mode {
        ImportMode::Overwrite => {
            let added = snapshot.tasks.len();
            board.tasks = snapshot.tasks;
            board.filter = None;
            board.last_completed = None;
            if let Some(title) = snapshot.title {
                settings.title = title;
            }
            if let Some(sound) = snapshot.sound_enabled {
                settings.sound_enabled = sound;
            }
            ImportReport { mode, added, skipped: 0 }
        }
        ImportMode::Merge => {
            let existing: HashSet<Uuid> = board.tasks.iter().map(|t| t.id).collect();
            let mut added = 0;
            let mut skipped = 0;
            for task in snapshot.tasks {
                if existing.contains(&task.id) {
                    skipped += 1;
                } else {
                    board.tasks.push(task);
                    added += 1;
                }
            }
            ImportReport { mode, added, skipped }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
