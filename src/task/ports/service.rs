//! Service port exposing the task operations offered to callers.

use crate::task::domain::{Task, TaskDraft, TaskId};
use crate::task::ports::TaskRepositoryError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management contract consumed by the API layer.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Returns all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>>;

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task exists.
    async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task>;

    /// Creates an open task from a draft, assigning a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    async fn create_task(&self, draft: TaskDraft) -> TaskServiceResult<Task>;

    /// Replaces the content and completion flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task exists.
    async fn update_task(&self, id: TaskId, draft: TaskDraft) -> TaskServiceResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task exists,
    /// including one that was already deleted.
    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()>;

    /// Marks a task as done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task exists.
    async fn mark_done(&self, id: TaskId) -> TaskServiceResult<()>;
}

/// Service-level errors for task operations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}
