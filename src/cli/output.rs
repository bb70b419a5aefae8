use serde::Serialize;

use crate::model::palette::sticky_style;
use crate::model::task::Task;
use crate::ops::snapshot::{ImportMode, ImportReport};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub text: String,
    pub color: String,
    pub color_name: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Serialize)]
pub struct ListJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub active: usize,
    pub completed: usize,
    pub completed_today: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ImportReportJson {
    pub mode: &'static str,
    pub added: usize,
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.to_string(),
        text: task.text.clone(),
        color: task.color.clone(),
        color_name: sticky_style(&task.color).name,
        completed: task.is_completed,
        completed_at: task.completed_at,
        created_at: task.created_at,
    }
}

pub fn report_to_json(report: &ImportReport) -> ImportReportJson {
    ImportReportJson {
        mode: match report.mode {
            ImportMode::Merge => "merge",
            ImportMode::Overwrite => "overwrite",
        },
        added: report.added,
        skipped: report.skipped,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let check = if task.is_completed { 'x' } else { ' ' };
    let short_id = &task.id.to_string()[..8];
    format!(
        "[{}] {}  {}  ({})",
        check,
        short_id,
        task.text,
        sticky_style(&task.color).name
    )
}
