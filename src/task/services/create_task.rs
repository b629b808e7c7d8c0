//! Single task creation.

use super::{CreateTaskCommand, TaskResponse, TaskUseCaseResult};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;

/// Creates one task from a validated command.
#[derive(Clone)]
pub struct CreateTaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CreateTaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Trims and validates the command, then persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskUseCaseError::DomainValidation`] when the label
    /// or description is blank, or [`super::TaskUseCaseError::Repository`]
    /// when the repository rejects persistence.
    pub async fn execute(&self, command: CreateTaskCommand) -> TaskUseCaseResult<TaskResponse> {
        let task = Task::create(
            command.label(),
            command.description(),
            command.completed(),
            &*self.clock,
        )?;
        let saved = self.repository.save(&task).await?;
        tracing::debug!(task_id = %saved.id(), "task created");
        Ok(saved.into())
    }
}
