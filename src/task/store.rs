//! Task store - the authoritative ordered collection of tasks

use chrono::NaiveDate;
use tracing::debug;

use super::model::{Task, TaskFields, TaskId};

/// Ordered, id-unique collection of tasks.
///
/// Lives only in memory: it starts empty and dies with the process. All
/// operations are synchronous and infallible; operations on an unknown id
/// are silent no-ops.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks, in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new open task with a fresh id. The form validates the
    /// fields before they reach the store.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due: NaiveDate,
    ) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let task = Task::new(id, title, description, due);
        debug!("add {}: {}", id, task.title);
        self.tasks.push(task);
        id
    }

    /// Replace the editable fields of the task with `id`. The id and the
    /// completion flag are never touched here.
    pub fn update(&mut self, id: TaskId, fields: TaskFields) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            debug!("update {}: {}", id, fields.title);
            task.title = fields.title;
            task.description = fields.description;
            task.due = fields.due;
        }
    }

    /// Flip the completion flag of the task with `id`.
    pub fn toggle_completed(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            debug!("toggle {}: completed={}", id, task.completed);
        }
    }

    /// Delete the task with `id`. The relative order of the remaining
    /// tasks is preserved.
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            debug!("remove {}", id);
        }
    }

    /// Move the task with `source` to the slot occupied by `target`; every
    /// task between the two slots shifts by one. No-op when the ids are
    /// equal or either is absent.
    pub fn reorder(&mut self, source: TaskId, target: TaskId) {
        if source == target {
            return;
        }
        let Some(from) = self.tasks.iter().position(|t| t.id == source) else {
            return;
        };
        let Some(to) = self.tasks.iter().position(|t| t.id == target) else {
            return;
        };
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        debug!("reorder {} to slot of {}", source, target);
    }
}
