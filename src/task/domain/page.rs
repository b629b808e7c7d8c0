//! Pagination value types for task listing.

use super::Task;

/// Largest page size accepted by task listing.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A window over the task collection, expressed as a zero-based page number
/// and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    size: u32,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// Bounds checking belongs to the listing use case; repositories accept
    /// any window, including a zero size.
    #[must_use]
    pub const fn new(page: u64, size: u32) -> Self {
        Self { page, size }
    }

    /// Returns the zero-based page number.
    #[must_use]
    pub const fn page(self) -> u64 {
        self.page
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the number of records preceding this page.
    ///
    /// Saturates instead of overflowing for absurdly large page numbers.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.page.saturating_mul(self.size as u64)
    }
}

/// Pagination metadata echoed back with a page of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    /// Requested zero-based page number.
    pub page: u64,
    /// Requested page size.
    pub size: u32,
    /// Number of tasks in the store when the page was read.
    pub total_count: u64,
}

/// One page of tasks together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksPage {
    /// Tasks in this page, in creation order.
    pub tasks: Vec<Task>,
    /// Pagination metadata for this page.
    pub pagination: Pagination,
}

impl TasksPage {
    /// Assembles a page from the window it was read with and the store's
    /// total count.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, request: PageRequest, total_count: u64) -> Self {
        Self {
            tasks,
            pagination: Pagination {
                page: request.page,
                size: request.size,
                total_count,
            },
        }
    }
}
