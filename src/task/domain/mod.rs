//! Domain model for task management.
//!
//! The task domain owns label and description validation, the completion
//! flag, and the pagination value types shared by the repository port and the
//! listing use case. Infrastructure concerns stay outside this boundary.

mod error;
mod ids;
mod page;
mod task;
mod text;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use page::{MAX_PAGE_SIZE, PageRequest, Pagination, TasksPage};
pub use task::{PersistedTaskData, Task};
pub use text::{TaskDescription, TaskLabel};
