//! Application services for task management.
//!
//! Each use case is its own service, generic over the repository port.
//! [`TaskServices`] wires all five against one repository and clock.

mod commands;
mod create_multiple_tasks;
mod create_task;
mod error;
mod get_task_by_id;
mod get_tasks;
mod responses;
mod update_task_status;

pub use commands::{CreateMultipleTasksCommand, CreateTaskCommand, UpdateTaskStatusCommand};
pub use create_multiple_tasks::CreateMultipleTasksService;
pub use create_task::CreateTaskService;
pub use error::{TaskUseCaseError, TaskUseCaseResult};
pub use get_task_by_id::GetTaskByIdService;
pub use get_tasks::GetTasksService;
pub use responses::{MultipleTasksResponse, PaginationInfo, TaskCatalogueResponse, TaskResponse};
pub use update_task_status::UpdateTaskStatusService;

use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::sync::Arc;

/// The full set of task use cases sharing one repository and clock.
pub struct TaskServices<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Single task creation.
    pub create_task: CreateTaskService<R, C>,
    /// All-or-nothing batch creation.
    pub create_multiple_tasks: CreateMultipleTasksService<R, C>,
    /// Lookup by identifier.
    pub get_task_by_id: GetTaskByIdService<R>,
    /// Paginated listing.
    pub get_tasks: GetTasksService<R>,
    /// Completion flag updates.
    pub update_task_status: UpdateTaskStatusService<R, C>,
}

impl<R, C> TaskServices<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Builds every task service over the given repository and clock.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            create_task: CreateTaskService::new(Arc::clone(&repository), Arc::clone(&clock)),
            create_multiple_tasks: CreateMultipleTasksService::new(
                Arc::clone(&repository),
                Arc::clone(&clock),
            ),
            get_task_by_id: GetTaskByIdService::new(Arc::clone(&repository)),
            get_tasks: GetTasksService::new(Arc::clone(&repository)),
            update_task_status: UpdateTaskStatusService::new(repository, clock),
        }
    }
}
