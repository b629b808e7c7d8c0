//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task label is empty after trimming.
    #[error("The task label cannot be blank.")]
    InvalidTaskLabel,

    /// The task description is empty after trimming.
    #[error("The task description cannot be blank.")]
    InvalidTaskDescription,
}

impl TaskDomainError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidTaskLabel => "INVALID_TASK_LABEL",
            Self::InvalidTaskDescription => "INVALID_TASK_DESCRIPTION",
        }
    }
}
