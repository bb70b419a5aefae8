use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::io::store::{KvStore, keys};
use crate::model::board::Board;
use crate::model::settings::{DENSITY_LEVELS, Settings};
use crate::model::task::Task;

/// Persisted slice of ephemeral UI state, the undo slot. Kept under its own
/// key so task data and UI state never invalidate each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiState {
    #[serde(default)]
    last_completed: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Hydrate the board from the store.
///
/// Load order: current-format tasks; when that key is absent or holds an
/// empty array, a non-empty legacy-format array is adopted (one-time
/// migration); otherwise the starter board. Malformed values log a warning
/// and fall back — loading never raises.
pub fn load_board(store: &dyn KvStore, now_ms: i64) -> Board {
    let mut board = Board::new(load_tasks(store, now_ms));

    if let Some(raw) = store.get(keys::STATE) {
        match serde_json::from_str::<UiState>(&raw) {
            // A stale undo slot (task since deleted) is dropped here.
            Ok(state) => {
                board.last_completed = state
                    .last_completed
                    .filter(|id| board.find(*id).is_some_and(|t| t.is_completed));
            }
            Err(e) => warn!("ignoring malformed ui state: {}", e),
        }
    }
    board
}

fn load_tasks(store: &dyn KvStore, now_ms: i64) -> Vec<Task> {
    if let Some(raw) = store.get(keys::TASKS) {
        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) if !tasks.is_empty() => return normalize(tasks),
            Ok(_) => {} // empty array: give legacy data a chance below
            Err(e) => {
                warn!("corrupt task store, starting fresh: {}", e);
                return Board::starter(now_ms).tasks;
            }
        }
    }

    if let Some(raw) = store.get(keys::TASKS_LEGACY) {
        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) if !tasks.is_empty() => {
                info!("adopting {} tasks from legacy storage", tasks.len());
                return normalize(tasks);
            }
            Ok(_) => {}
            Err(e) => warn!("ignoring corrupt legacy task data: {}", e),
        }
    }

    Board::starter(now_ms).tasks
}

/// Repair hand-edited records where the completion flag disagrees with the
/// timestamp. The timestamp wins.
fn normalize(mut tasks: Vec<Task>) -> Vec<Task> {
    for task in &mut tasks {
        if task.is_completed != task.completed_at.is_some() {
            warn!("repairing completion flag on task {}", task.id);
            task.is_completed = task.completed_at.is_some();
        }
    }
    tasks
}

/// Write-through after a mutation. Best effort: a storage failure is logged
/// and the in-memory board stays authoritative for the session.
pub fn save_board(store: &mut dyn KvStore, board: &Board) {
    match serde_json::to_string(&board.tasks) {
        Ok(json) => {
            if let Err(e) = store.set(keys::TASKS, &json) {
                warn!("failed to persist tasks: {}", e);
            }
        }
        Err(e) => warn!("failed to serialize tasks: {}", e),
    }

    let state = UiState { last_completed: board.last_completed };
    match serde_json::to_string(&state) {
        Ok(json) => {
            if let Err(e) = store.set(keys::STATE, &json) {
                warn!("failed to persist ui state: {}", e);
            }
        }
        Err(e) => warn!("failed to serialize ui state: {}", e),
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Load settings, each key independently falling back to its default on a
/// missing or malformed value.
pub fn load_settings(store: &dyn KvStore) -> Settings {
    let mut settings = Settings::default();

    if let Some(title) = store.get(keys::TITLE)
        && !title.trim().is_empty()
    {
        settings.title = title;
    }

    if let Some(raw) = store.get(keys::SOUND) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(v) => settings.sound_enabled = v,
            Err(e) => warn!("ignoring malformed sound setting: {}", e),
        }
    }

    if let Some(raw) = store.get(keys::DENSITY) {
        match raw.trim().parse::<u8>() {
            Ok(v) if v < DENSITY_LEVELS => settings.view_density = v,
            _ => warn!("ignoring malformed view density {:?}", raw),
        }
    }

    // Unknown theme keys are kept: the renderer falls back per lookup, and
    // a later version may know the key.
    if let Some(theme) = store.get(keys::THEME)
        && !theme.trim().is_empty()
    {
        settings.theme = theme.trim().to_string();
    }

    settings
}

/// Write-through for settings; same best-effort contract as `save_board`.
pub fn save_settings(store: &mut dyn KvStore, settings: &Settings) {
    let entries = [
        (keys::TITLE, settings.title.clone()),
        (keys::SOUND, settings.sound_enabled.to_string()),
        (keys::DENSITY, settings.view_density.to_string()),
        (keys::THEME, settings.theme.clone()),
    ];
    for (key, value) in entries {
        if let Err(e) = store.set(key, &value) {
            warn!("failed to persist setting {}: {}", key, e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
