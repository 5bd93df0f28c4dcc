//! Taskdeck library - in-memory task store, view filtering, and the terminal UI

pub mod cli;
pub mod config;
pub mod task;
pub mod tui;
