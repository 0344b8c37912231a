//! Default [`TaskService`] implementation backed by a [`TaskRepository`].

use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskService, TaskServiceError, TaskServiceResult},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Task management service.
#[derive(Clone)]
pub struct TaskManagementService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskManagementService<R>
where
    R: TaskRepository,
{
    /// Creates a new task management service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}

#[async_trait]
impl<R> TaskService for TaskManagementService<R>
where
    R: TaskRepository,
{
    async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.load(id).await
    }

    async fn create_task(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        // New tasks always start open; client-supplied `id` and `done` are dropped.
        let task = self.repository.insert(draft.content).await?;
        info!(task_id = %task.id(), "created task");
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, draft: TaskDraft) -> TaskServiceResult<Task> {
        let mut task = self.load(id).await?;
        task.replace(draft);
        self.repository.update(&task).await?;
        info!(task_id = %id, done = task.is_done(), "updated task");
        Ok(task)
    }

    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.remove(id).await?;
        info!(task_id = %id, "deleted task");
        Ok(())
    }

    async fn mark_done(&self, id: TaskId) -> TaskServiceResult<()> {
        let mut task = self.load(id).await?;
        task.mark_done();
        self.repository.update(&task).await?;
        info!(task_id = %id, "marked task done");
        Ok(())
    }
}
