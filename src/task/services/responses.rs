//! Response models returned by the task use cases.

use crate::task::domain::{Pagination, Task, TasksPage};
use uuid::Uuid;

/// Client-facing view of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Trimmed label.
    pub label: String,
    /// Trimmed description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().into_inner(),
            completed: task.is_completed(),
            label: task.label().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
        }
    }
}

/// Tasks created by one batch request, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipleTasksResponse {
    /// Created tasks.
    pub tasks: Vec<TaskResponse>,
}

/// Pagination metadata for a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Requested zero-based page number.
    pub page: u64,
    /// Requested page size.
    pub size: u32,
    /// Total number of stored tasks.
    pub total_count: u64,
}

impl From<Pagination> for PaginationInfo {
    fn from(pagination: Pagination) -> Self {
        Self {
            page: pagination.page,
            size: pagination.size,
            total_count: pagination.total_count,
        }
    }
}

/// One page of tasks with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCatalogueResponse {
    /// Tasks in this page.
    pub items: Vec<TaskResponse>,
    /// Pagination metadata.
    pub pagination: PaginationInfo,
}

impl From<TasksPage> for TaskCatalogueResponse {
    fn from(page: TasksPage) -> Self {
        Self {
            items: page.tasks.into_iter().map(TaskResponse::from).collect(),
            pagination: page.pagination.into(),
        }
    }
}
