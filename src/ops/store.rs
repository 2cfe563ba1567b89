use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::io::store_io::{self, LoadError};
use crate::model::task::{Priority, Task, default_list_name};
use crate::parse::parse_quick_entry;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("due date must be YYYY-MM-DD or empty, got \"{0}\"")]
    InvalidDateFormat(String),
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("ambiguous task id \"{prefix}\": {count} matches")]
    AmbiguousId { prefix: String, count: usize },
    /// The change is applied in memory; only the write to disk failed. The
    /// next successful mutation rewrites the whole file.
    #[error("could not save task file: {0}")]
    SaveFailed(#[source] std::io::Error),
}

/// A partial update applied by [`Store::update`]. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub is_recurring: Option<bool>,
    pub notes: Option<String>,
}

/// The authoritative in-memory task collection, bound to its backing file.
///
/// Tasks keep insertion order. Every effective mutation is written through to
/// disk before the call returns; no-ops (empty title, unknown id) don't touch
/// the file.
#[derive(Debug)]
pub struct Store {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl Store {
    /// Wrap an already-loaded task list. Used directly when recovering from a
    /// corrupt file with an empty list.
    pub fn new(path: PathBuf, tasks: Vec<Task>) -> Self {
        Store { tasks, path }
    }

    /// Load the store from its backing file. A missing file starts empty.
    pub fn open(path: PathBuf) -> Result<Self, LoadError> {
        let tasks = store_io::load_tasks(&path)?;
        Ok(Store { tasks, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from a quick-entry line.
    ///
    /// The raw title is trimmed and classified (priority and date keywords),
    /// then stored with a fresh id in the given list. An empty trimmed title
    /// is rejected before anything changes.
    pub fn create(&mut self, title: &str, list_name: &str) -> Result<Task, StoreError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let entry = parse_quick_entry(trimmed, Local::now().date_naive());
        let mut task = Task::new(
            self.generate_id(),
            entry.title,
            if list_name.is_empty() {
                default_list_name()
            } else {
                list_name.to_string()
            },
        );
        task.priority = entry.priority;
        task.due_date = entry.due_date;

        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Flip a task between done and pending. Unknown ids are a silent no-op.
    pub fn toggle_done(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        task.is_done = !task.is_done;
        self.persist()
    }

    /// Remove a task. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Apply a partial update. Validation runs before any field is touched,
    /// so a rejected patch leaves the task exactly as it was.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        if let Some(due) = &patch.due_date {
            if !due.is_empty() && NaiveDate::parse_from_str(due, "%Y-%m-%d").is_err() {
                return Err(StoreError::InvalidDateFormat(due.clone()));
            }
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(due) = &patch.due_date {
            task.due_date = due.clone();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(recurring) = patch.is_recurring {
            task.is_recurring = recurring;
        }
        if let Some(notes) = &patch.notes {
            task.notes = notes.clone();
        }

        self.persist()
    }

    /// All known list names: "Inbox" plus every list referenced by a task,
    /// sorted. Lists have no life of their own beyond this.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        names.insert("Inbox");
        for task in &self.tasks {
            names.insert(&task.list_name);
        }
        names.into_iter().map(str::to_string).collect()
    }

    /// Tasks belonging to one list, in store (insertion) order.
    pub fn tasks_in(&self, list_name: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.list_name == list_name)
            .collect()
    }

    /// Resolve a full id or a unique id prefix to a task id.
    pub fn resolve_id(&self, prefix: &str) -> Result<String, StoreError> {
        if self.tasks.iter().any(|t| t.id == prefix) {
            return Ok(prefix.to_string());
        }
        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.id.starts_with(prefix))
            .collect();
        match matches.len() {
            0 => Err(StoreError::NotFound(prefix.to_string())),
            1 => Ok(matches[0].id.clone()),
            count => Err(StoreError::AmbiguousId {
                prefix: prefix.to_string(),
                count,
            }),
        }
    }

    /// Timestamp-derived opaque id, suffixed when two creations land on the
    /// same instant. Ids are never reused: deleted tasks can't free one up
    /// because the clock only moves forward.
    fn generate_id(&self) -> String {
        let base = Local::now().format("%Y%m%d%H%M%S%f").to_string();
        if !self.tasks.iter().any(|t| t.id == base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.tasks.iter().any(|t| t.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        store_io::save_tasks(&self.path, &self.tasks).map_err(StoreError::SaveFailed)
    }
}
