use uuid::Uuid;

use crate::model::board::Board;
use crate::model::task::Task;

/// Directional move within the active run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Up,
    Down,
    Bottom,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "top" => Some(Direction::Top),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "bottom" => Some(Direction::Bottom),
            _ => None,
        }
    }
}

/// Why a move was refused. Both cases are expected, user-triggered
/// conditions; the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cannot reorder while a color filter is active")]
    Filtered,
    #[error("task is not in the active list")]
    NotActive,
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Append a new task to the end of the collection. Returns its id, or
/// `None` when the text trims to empty (nothing is added).
pub fn add_task(board: &mut Board, text: &str, color: Option<&str>, now_ms: i64) -> Option<Uuid> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let task = Task::new(text.to_string(), color, now_ms);
    let id = task.id;
    board.tasks.push(task);
    Some(id)
}

/// Replace a task's text. Empty edits are discarded, keeping the prior
/// text. Returns whether anything changed.
pub fn edit_text(board: &mut Board, id: Uuid, new_text: &str) -> bool {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return false;
    }
    match board.find_mut(id) {
        Some(task) => {
            task.text = new_text.to_string();
            true
        }
        None => false,
    }
}

/// Replace a task's color. The key is not validated here; unknown keys
/// degrade to the default style at read time.
pub fn change_color(board: &mut Board, id: Uuid, new_color: &str) -> bool {
    match board.find_mut(id) {
        Some(task) => {
            task.color = new_color.to_string();
            true
        }
        None => false,
    }
}

/// Remove a task entirely, whatever its completion state. Irreversible.
pub fn delete_task(board: &mut Board, id: Uuid) -> bool {
    let before = board.tasks.len();
    board.tasks.retain(|t| t.id != id);
    let removed = board.tasks.len() != before;
    if removed && board.last_completed == Some(id) {
        board.last_completed = None;
    }
    removed
}

/// Mark a task completed, leaving its storage position unchanged, and
/// record it as the undo candidate. Only the single most recent completion
/// is undoable. Idempotent on already-completed tasks.
pub fn complete_task(board: &mut Board, id: Uuid, now_ms: i64) -> bool {
    match board.find_mut(id) {
        Some(task) => {
            task.complete(now_ms);
            board.last_completed = Some(id);
            true
        }
        None => false,
    }
}

/// Clear a task's completion. Used by both explicit history-restore and
/// undo.
pub fn restore_task(board: &mut Board, id: Uuid) -> bool {
    match board.find_mut(id) {
        Some(task) => {
            task.restore();
            true
        }
        None => false,
    }
}

/// Undo the most recent completion, if one is recorded. Single level: the
/// slot is cleared whether or not the task still exists.
pub fn undo_last(board: &mut Board) -> Option<Uuid> {
    let id = board.last_completed.take()?;
    if restore_task(board, id) { Some(id) } else { None }
}

/// Reorder a task within the active run.
///
/// Partitions the collection into active and completed (each keeping its
/// relative order), repositions the task among the actives, and reassembles
/// as `active ++ completed`. Refused outright while a color filter is set:
/// moving against a partial view would corrupt the true order.
pub fn move_task(board: &mut Board, id: Uuid, direction: Direction) -> Result<(), MoveError> {
    if board.filter.is_some() {
        return Err(MoveError::Filtered);
    }
    // Locate the task within the active run before touching storage, so a
    // rejected move (unknown id, completed task) leaves the order intact.
    let Some(current) = board
        .tasks
        .iter()
        .filter(|t| !t.is_completed)
        .position(|t| t.id == id)
    else {
        return Err(MoveError::NotActive);
    };

    let (mut active, completed): (Vec<Task>, Vec<Task>) =
        board.tasks.drain(..).partition(|t| !t.is_completed);

    let task = active.remove(current);
    let target = match direction {
        Direction::Top => 0,
        Direction::Bottom => active.len(),
        Direction::Up => current.saturating_sub(1),
        Direction::Down => (current + 1).min(active.len()),
    };
    active.insert(target, task);

    board.tasks = active;
    board.tasks.extend(completed);
    Ok(())
}

/// Complete every active task in one pass, all with the same timestamp.
/// Returns the number affected (0 when there was nothing to do). Bulk
/// completion does not record an undo candidate.
pub fn complete_all_active(board: &mut Board, now_ms: i64) -> usize {
    let mut count = 0;
    for task in board.tasks.iter_mut().filter(|t| !t.is_completed) {
        task.complete(now_ms);
        count += 1;
    }
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
