use serde::Serialize;

use crate::model::task::{Priority, Task};
use crate::ops::projection::TaskRow;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub list: &'a str,
    pub priority: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub due_date: &'a str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub notes: &'a str,
    pub is_recurring: bool,
}

pub fn task_to_json(task: &Task) -> TaskJson<'_> {
    TaskJson {
        id: &task.id,
        title: &task.title,
        list: &task.list_name,
        priority: task.priority.code(),
        due_date: &task.due_date,
        status: if task.is_done { "Done" } else { "Pending" },
        notes: &task.notes,
        is_recurring: task.is_recurring,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Column header matching `format_row`.
pub fn format_header() -> String {
    format!(
        "{:<23} {:<3} {:<10} {:<8} {}",
        "ID", "P", "Due", "Status", "Title"
    )
}

/// One projection row as a fixed-width table line.
pub fn format_row(row: &TaskRow) -> String {
    let task = row.task;
    let priority = dash_if_empty(task.priority.code());
    let due = dash_if_empty(&task.due_date);
    format!(
        "{:<23} {:<3} {:<10} {:<8} {}",
        task.id, priority, due, row.status_label, task.title
    )
}

/// Multi-line detail view for a single task.
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mark = if task.is_done { 'x' } else { ' ' };
    let mut lines = vec![format!("[{}] {} {}", mark, task.id, task.title)];
    lines.push(format!("list: {}", task.list_name));
    lines.push(format!("priority: {}", dash_if_empty(task.priority.code())));
    lines.push(format!("due: {}", dash_if_empty(&task.due_date)));
    if task.is_recurring {
        lines.push("recurring: yes".to_string());
    }
    if !task.notes.is_empty() {
        lines.push("notes:".to_string());
        for line in task.notes.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines
}

fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// Parse a priority argument into a code
pub fn parse_priority_arg(s: &str) -> Result<Priority, String> {
    match s.to_lowercase().as_str() {
        "p1" => Ok(Priority::P1),
        "p2" => Ok(Priority::P2),
        "p3" => Ok(Priority::P3),
        "none" | "" => Ok(Priority::Unset),
        _ => Err(format!(
            "unknown priority '{}' (expected: P1, P2, P3, none)",
            s
        )),
    }
}
