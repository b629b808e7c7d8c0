//! Validated text fields carried by a task.

use super::TaskDomainError;
use std::fmt;

/// Short human-readable task title, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskLabel(String);

impl TaskLabel {
    /// Creates a validated label from raw input, trimming surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskLabel`] when the value is empty
    /// after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        non_blank(value.as_ref())
            .map(Self)
            .ok_or(TaskDomainError::InvalidTaskLabel)
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the label and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Free-text task description, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description from raw input, trimming surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskDescription`] when the value is
    /// empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        non_blank(value.as_ref())
            .map(Self)
            .ok_or(TaskDomainError::InvalidTaskDescription)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the description and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl AsRef<str> for TaskLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
