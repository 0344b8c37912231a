//! Domain model for task management.
//!
//! A task is a to-do item with an immutable identifier, free-form content, and
//! a completion flag. Infrastructure concerns stay outside this boundary.

mod ids;
mod task;

pub use ids::TaskId;
pub use task::{Task, TaskDraft};
