use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Priority code attached to a task.
///
/// `Unset` is a real state (a cleared priority, not a missing field) and is
/// written to disk as `""`. Unknown strings in hand-edited files also land on
/// `Unset` rather than failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    #[default]
    #[serde(rename = "")]
    #[serde(other)]
    Unset,
}

impl Priority {
    /// Sort rank: P1 first, unset after every concrete priority.
    pub fn rank(self) -> u8 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::Unset => 4,
        }
    }

    /// The code shown in the priority column (`""` when unset).
    pub fn code(self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::Unset => "",
        }
    }
}

/// The list tasks belong to when no list was chosen.
pub fn default_list_name() -> String {
    "Inbox".to_string()
}

/// A single task record. Field names and order match the on-disk JSON format;
/// everything except `id` and `title` has a default so partially-present
/// records load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique id, assigned at creation and never changed.
    pub id: String,
    pub title: String,
    /// ISO `YYYY-MM-DD`, or `""` for no due date. Kept as text so loaded
    /// files are taken as-is; validation happens only when the user edits.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub notes: String,
    /// Placeholder flag, stored but without scheduling behavior.
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default = "default_list_name")]
    pub list_name: String,
    /// Fields this program doesn't interpret, carried through load → save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a task with the given identity and all other fields defaulted.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        list_name: impl Into<String>,
    ) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            due_date: String::new(),
            priority: Priority::default(),
            is_done: false,
            notes: String::new(),
            is_recurring: false,
            list_name: list_name.into(),
            extra: Map::new(),
        }
    }

    /// The due date as a calendar date, if present and well-formed.
    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}
