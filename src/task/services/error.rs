//! Service-level errors shared by the task use cases.

use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Errors returned by task use cases.
///
/// Every variant carries a stable code (see [`TaskUseCaseError::code`]) that
/// the web adapter exposes to clients.
#[derive(Debug, Clone, Error)]
pub enum TaskUseCaseError {
    /// Domain validation failed.
    #[error(transparent)]
    DomainValidation(#[from] TaskDomainError),

    /// No task exists with the requested identifier.
    #[error("The task was not found.")]
    TaskNotFound(TaskId),

    /// The task vanished between lookup and update.
    #[error("The task could not be updated.")]
    TaskUpdateFailed(TaskId),

    /// The requested page number is below zero.
    #[error("The page number must not be negative.")]
    PageNumberNegative,

    /// The requested page size is below zero.
    #[error("The page size must not be negative.")]
    PageSizeNegative,

    /// The requested page size exceeds [`crate::task::domain::MAX_PAGE_SIZE`].
    #[error("The page size must not exceed 100.")]
    PageSizeTooLarge,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskUseCaseError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DomainValidation(domain) => domain.code(),
            Self::TaskNotFound(_) => "TASK_NOT_FOUND",
            Self::TaskUpdateFailed(_) => "TASK_UPDATE_FAILED",
            Self::PageNumberNegative => "PAGE_NUMBER_NEGATIVE",
            Self::PageSizeNegative => "PAGE_SIZE_NEGATIVE",
            Self::PageSizeTooLarge => "PAGE_SIZE_TOO_LARGE",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type for task use case operations.
pub type TaskUseCaseResult<T> = Result<T, TaskUseCaseError>;
