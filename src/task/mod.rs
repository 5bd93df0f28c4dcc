//! Task domain module
//!
//! This module provides the to-do list core:
//! - Task data model with due-date validation
//! - Ordered in-memory store (add/update/toggle/remove/reorder)
//! - View filter and reconciler for search + move gestures

pub mod model;
pub mod store;
pub mod view;

pub use model::{parse_due_date, FormError, Task, TaskFields, TaskId};
pub use store::TaskStore;
pub use view::{apply_drag_end, display_ids, DragEnd};
