//! View filter and reconciler
//!
//! Derives the displayed subset of the store from a search string and maps
//! gestures on displayed rows back to store identities. Every lookup is
//! keyed by `TaskId`, never by a position in the filtered sequence, so a
//! filter that hides intervening tasks can never skew which task a
//! mutation or reorder lands on.

use super::model::{Task, TaskId};
use super::store::TaskStore;

/// Ids of the tasks whose title contains `query` case-insensitively, in
/// store order. An empty query matches every task.
pub fn display_ids(tasks: &[Task], query: &str) -> Vec<TaskId> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .map(|t| t.id)
        .collect()
}

/// Terminal event of a move gesture: the grabbed task and the displayed
/// task whose slot it was dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub source: TaskId,
    pub target: TaskId,
}

/// Apply a completed move gesture to the store.
///
/// The gesture happened over the displayed (possibly filtered) rows, but
/// both endpoints are identities, so the store-level move shifts hidden
/// tasks between the two slots correctly. Last write wins; a gesture whose
/// endpoints coincide is a no-op, which also covers the degenerate
/// filtered view of size one.
pub fn apply_drag_end(store: &mut TaskStore, drag: DragEnd) {
    store.reorder(drag.source, drag.target);
}
