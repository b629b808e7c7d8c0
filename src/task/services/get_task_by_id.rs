//! Task lookup by identifier.

use super::{TaskResponse, TaskUseCaseError, TaskUseCaseResult};
use crate::task::{domain::TaskId, ports::TaskRepository};
use std::sync::Arc;

/// Retrieves one task by identifier.
#[derive(Clone)]
pub struct GetTaskByIdService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> GetTaskByIdService<R>
where
    R: TaskRepository,
{
    /// Creates a new lookup service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the current representation of the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::TaskNotFound`] when no task matches, or
    /// [`TaskUseCaseError::Repository`] when the lookup fails.
    pub async fn execute(&self, task_id: TaskId) -> TaskUseCaseResult<TaskResponse> {
        self.repository
            .find_by_id(task_id)
            .await?
            .map(TaskResponse::from)
            .ok_or(TaskUseCaseError::TaskNotFound(task_id))
    }
}
