//! Completion flag updates.

use super::{TaskResponse, TaskUseCaseError, TaskUseCaseResult, UpdateTaskStatusCommand};
use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::sync::Arc;

/// Marks tasks completed or incomplete.
#[derive(Clone)]
pub struct UpdateTaskStatusService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UpdateTaskStatusService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new status update service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Applies the requested completion flag to an existing task.
    ///
    /// Requesting the flag the task already has succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::TaskNotFound`] when no task matches,
    /// [`TaskUseCaseError::TaskUpdateFailed`] when the task disappears before
    /// the write lands, or [`TaskUseCaseError::Repository`] on persistence
    /// failure.
    pub async fn execute(
        &self,
        command: UpdateTaskStatusCommand,
    ) -> TaskUseCaseResult<TaskResponse> {
        let task_id = command.task_id();
        let mut task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskUseCaseError::TaskNotFound(task_id))?;

        let changed = task.update_status(command.completed(), &*self.clock);
        let saved = self
            .repository
            .update_task(&task)
            .await?
            .ok_or(TaskUseCaseError::TaskUpdateFailed(task_id))?;
        tracing::debug!(%task_id, completed = saved.is_completed(), changed, "task status updated");
        Ok(saved.into())
    }
}
