//! Task aggregate root.

use super::{TaskDescription, TaskDomainError, TaskId, TaskLabel};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Task aggregate root.
///
/// Label and description are validated on every construction path, so a
/// `Task` value never carries blank text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    label: TaskLabel,
    description: TaskDescription,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted label, validated again on rehydration.
    pub label: String,
    /// Persisted description, validated again on rehydration.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn new(
        label: TaskLabel,
        description: TaskDescription,
        completed: bool,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            label,
            description,
            completed,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Validates raw text and creates a new task.
    ///
    /// The label is checked before the description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskLabel`] or
    /// [`TaskDomainError::InvalidTaskDescription`] when the corresponding
    /// field is blank after trimming.
    pub fn create(
        label: &str,
        description: &str,
        completed: bool,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let validated_label = TaskLabel::new(label)?;
        let validated_description = TaskDescription::new(description)?;
        Ok(Self::new(
            validated_label,
            validated_description,
            completed,
            clock,
        ))
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the stored label or description is
    /// blank.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: data.id,
            label: TaskLabel::new(data.label)?,
            description: TaskDescription::new(data.description)?,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task label.
    #[must_use]
    pub const fn label(&self) -> &TaskLabel {
        &self.label
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the completion flag.
    ///
    /// Setting the current value is a no-op and leaves `updated_at`
    /// untouched. Returns `true` when the flag changed.
    pub fn update_status(&mut self, completed: bool, clock: &impl Clock) -> bool {
        if self.completed == completed {
            return false;
        }
        self.completed = completed;
        self.updated_at = clock.utc();
        true
    }
}
