//! Task data model

use chrono::{NaiveDate, Utc};
use std::fmt;
use thiserror::Error;

/// Unique task identifier. Assigned monotonically by the store at creation
/// and immutable for the task's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validation errors surfaced by the task form on submit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Due date must be YYYY-MM-DD")]
    InvalidDueDate,
}

/// Parse a due date as entered in the form (YYYY-MM-DD).
///
/// This is the input-layer validation boundary: the store itself assumes
/// well-formed dates.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, FormError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField("Due date"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| FormError::InvalidDueDate)
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id
    pub id: TaskId,

    /// Task title (non-empty, enforced by the form)
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Calendar due date
    pub due: NaiveDate,

    /// Completion flag
    pub completed: bool,
}

/// The editable subset of a task: everything `update` may replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
}

impl Task {
    /// Create a new open task
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due,
            completed: false,
        }
    }

    /// Check if the task is past due and still open
    pub fn is_overdue(&self) -> bool {
        self.due < Utc::now().date_naive() && !self.completed
    }

    /// Check if the task is due today
    pub fn is_due_today(&self) -> bool {
        self.due == Utc::now().date_naive()
    }
}
