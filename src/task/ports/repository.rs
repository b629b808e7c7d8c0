//! Repository port for task persistence, lookup, and status updates.

use crate::task::domain::{PageRequest, Task, TaskId, TasksPage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the persisted representation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Stores a batch of new tasks atomically and returns them in input
    /// order.
    ///
    /// Either every task is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when any task ID already
    /// exists or appears twice in the batch.
    async fn save_all(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns one page of tasks in creation order together with the total
    /// task count.
    async fn find_all(&self, request: PageRequest) -> TaskRepositoryResult<TasksPage>;

    /// Atomically writes the task's completion flag and modification
    /// timestamp onto the stored record.
    ///
    /// Returns the stored task after the update, or `None` when no record
    /// with the task's ID exists any more.
    async fn update_task(&self, task: &Task) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
