//! Pagination helper types for repository queries.
//!
//! Pages are 1-indexed. `total_pages` is `0` for an empty result set and
//! `ceil(total / page_size)` otherwise, for listings and searches alike.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageRequest {
    /// Page number, starting at 1.
    pub page: u32,
    /// Number of items per page, 1 to 100.
    pub page_size: u32,
}

impl PageRequest {
    /// Creates a page request, clamping `page` to at least 1 and
    /// `page_size` into `1..=100`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcase_core::pagination::PageRequest;
    ///
    /// let request = PageRequest::new(2, 20);
    /// assert_eq!(request.skip(), 20);
    ///
    /// let clamped = PageRequest::new(0, 500);
    /// assert_eq!((clamped.page, clamped.page_size), (1, 100));
    /// ```
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Rows to skip before this page: `(page - 1) * page_size`.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum rows on this page.
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Number of pages needed for `total` rows.
    pub fn total_pages(&self, total: u64) -> u32 {
        total_pages(total, self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `ceil(total / page_size)`, with `0` when there are no rows.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if total == 0 || page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Paginated response containing items and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of matching items across all pages
    pub total: u64,
    /// Current page number
    pub page: u32,
    /// Number of items per page
    pub page_size: u32,
    /// Total number of pages
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Create a new paginated response.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcase_core::pagination::{Page, PageRequest};
    ///
    /// let page = Page::new(vec![1, 2, 3], 25, PageRequest::new(3, 10));
    /// assert_eq!(page.total_pages, 3);
    /// assert!(!page.has_next());
    /// ```
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(total),
        }
    }

    /// Check if there are more pages after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if there are pages before the current one
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Map the items to a different type
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
