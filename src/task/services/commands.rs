//! Command payloads accepted by the task use cases.

use crate::task::domain::TaskId;

/// Request payload for creating one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskCommand {
    label: String,
    description: String,
    completed: bool,
}

impl CreateTaskCommand {
    /// Creates a command for an incomplete task.
    #[must_use]
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the raw, untrimmed label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the raw, untrimmed description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the initial completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}

/// Request payload for creating several tasks at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateMultipleTasksCommand {
    tasks: Vec<CreateTaskCommand>,
}

impl CreateMultipleTasksCommand {
    /// Creates a batch command preserving the given order.
    #[must_use]
    pub fn new(tasks: impl IntoIterator<Item = CreateTaskCommand>) -> Self {
        Self {
            tasks: tasks.into_iter().collect(),
        }
    }

    /// Returns the per-task commands in input order.
    #[must_use]
    pub fn tasks(&self) -> &[CreateTaskCommand] {
        &self.tasks
    }
}

/// Request payload for changing a task's completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTaskStatusCommand {
    task_id: TaskId,
    completed: bool,
}

impl UpdateTaskStatusCommand {
    /// Creates a status update command.
    #[must_use]
    pub const fn new(task_id: TaskId, completed: bool) -> Self {
        Self { task_id, completed }
    }

    /// Returns the target task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}
