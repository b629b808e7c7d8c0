//! All-or-nothing batch task creation.

use super::{CreateMultipleTasksCommand, MultipleTasksResponse, TaskResponse, TaskUseCaseResult};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;

/// Creates several tasks in one atomic batch.
#[derive(Clone)]
pub struct CreateMultipleTasksService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CreateMultipleTasksService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new batch creation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates every task in order and persists them as one batch.
    ///
    /// Validation stops at the first invalid task and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns the first [`super::TaskUseCaseError::DomainValidation`] found,
    /// or [`super::TaskUseCaseError::Repository`] when the batch write fails.
    pub async fn execute(
        &self,
        command: CreateMultipleTasksCommand,
    ) -> TaskUseCaseResult<MultipleTasksResponse> {
        let tasks = command
            .tasks()
            .iter()
            .map(|task| {
                Task::create(
                    task.label(),
                    task.description(),
                    task.completed(),
                    &*self.clock,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let saved = self.repository.save_all(&tasks).await?;
        tracing::debug!(count = saved.len(), "task batch created");
        Ok(MultipleTasksResponse {
            tasks: saved.into_iter().map(TaskResponse::from).collect(),
        })
    }
}
