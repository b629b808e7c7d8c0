//! Paginated task listing.

use super::{TaskCatalogueResponse, TaskUseCaseError, TaskUseCaseResult};
use crate::task::{
    domain::{MAX_PAGE_SIZE, PageRequest},
    ports::TaskRepository,
};
use std::sync::Arc;

/// Lists tasks one page at a time.
#[derive(Clone)]
pub struct GetTasksService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> GetTasksService<R>
where
    R: TaskRepository,
{
    /// Creates a new listing service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the requested page of tasks and the total task count.
    ///
    /// Page and size are echoed as requested; a page past the end of the
    /// data is empty but valid.
    ///
    /// # Errors
    ///
    /// Returns [`TaskUseCaseError::PageNumberNegative`],
    /// [`TaskUseCaseError::PageSizeTooLarge`], or
    /// [`TaskUseCaseError::PageSizeNegative`] (checked in that order) for an
    /// out-of-range window, or [`TaskUseCaseError::Repository`] when the
    /// query fails.
    pub async fn execute(&self, page: i64, size: i64) -> TaskUseCaseResult<TaskCatalogueResponse> {
        let request = verify_paging(page, size)?;
        let tasks_page = self.repository.find_all(request).await?;
        Ok(tasks_page.into())
    }
}

fn verify_paging(page: i64, size: i64) -> TaskUseCaseResult<PageRequest> {
    if page < 0 {
        return Err(TaskUseCaseError::PageNumberNegative);
    }
    if size > i64::from(MAX_PAGE_SIZE) {
        return Err(TaskUseCaseError::PageSizeTooLarge);
    }
    let checked_page = u64::try_from(page).map_err(|_| TaskUseCaseError::PageNumberNegative)?;
    let checked_size = u32::try_from(size).map_err(|_| TaskUseCaseError::PageSizeNegative)?;
    Ok(PageRequest::new(checked_page, checked_size))
}
