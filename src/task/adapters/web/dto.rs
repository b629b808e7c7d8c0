//! JSON request and response bodies for the task HTTP API.

use crate::task::services::{
    CreateMultipleTasksCommand, CreateTaskCommand, MultipleTasksResponse, PaginationInfo,
    TaskCatalogueResponse, TaskResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default page number for `GET /tasks`.
const DEFAULT_PAGE: i64 = 0;
/// Default page size for `GET /tasks`.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Body of `POST /tasks` and each element of a bulk request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequestDto {
    /// Task label.
    pub label: String,
    /// Task description.
    pub description: String,
    /// Initial completion flag, `false` when omitted.
    #[serde(default)]
    pub completed: bool,
}

impl CreateTaskRequestDto {
    /// Converts the body into a use case command.
    #[must_use]
    pub fn into_command(self) -> CreateTaskCommand {
        CreateTaskCommand::new(self.label, self.description).with_completed(self.completed)
    }
}

/// Body of `POST /tasks/bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMultipleTasksRequestDto {
    /// Tasks to create, in order.
    pub tasks: Vec<CreateTaskRequestDto>,
}

impl CreateMultipleTasksRequestDto {
    /// Converts the body into a use case command.
    #[must_use]
    pub fn into_command(self) -> CreateMultipleTasksCommand {
        CreateMultipleTasksCommand::new(
            self.tasks
                .into_iter()
                .map(CreateTaskRequestDto::into_command),
        )
    }
}

/// Body of `PATCH /tasks/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusRequestDto {
    /// Requested completion flag.
    pub completed: bool,
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Zero-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size.
    #[serde(default = "default_page_size")]
    pub size: i64,
}

const fn default_page() -> i64 {
    DEFAULT_PAGE
}

const fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Task representation returned by every task endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponseDto {
    /// Task identifier.
    pub id: Uuid,
    /// Task label.
    pub label: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl From<TaskResponse> for TaskResponseDto {
    fn from(response: TaskResponse) -> Self {
        Self {
            id: response.id,
            label: response.label,
            description: response.description,
            completed: response.completed,
        }
    }
}

/// Body returned by `POST /tasks/bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleTasksResponseDto {
    /// Created tasks, in request order.
    pub tasks: Vec<TaskResponseDto>,
}

impl From<MultipleTasksResponse> for MultipleTasksResponseDto {
    fn from(response: MultipleTasksResponse) -> Self {
        Self {
            tasks: response.tasks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pagination block of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfoDto {
    /// Requested zero-based page number.
    pub page: u64,
    /// Requested page size.
    pub size: u32,
    /// Total number of tasks available.
    pub total_count: u64,
}

impl From<PaginationInfo> for PaginationInfoDto {
    fn from(pagination: PaginationInfo) -> Self {
        Self {
            page: pagination.page,
            size: pagination.size,
            total_count: pagination.total_count,
        }
    }
}

/// Body returned by `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksCatalogueDto {
    /// Tasks in the requested page.
    pub tasks: Vec<TaskResponseDto>,
    /// Pagination metadata.
    pub pagination: PaginationInfoDto,
}

impl From<TaskCatalogueResponse> for TasksCatalogueDto {
    fn from(response: TaskCatalogueResponse) -> Self {
        Self {
            tasks: response.items.into_iter().map(Into::into).collect(),
            pagination: response.pagination.into(),
        }
    }
}
