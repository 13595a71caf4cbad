//! The query-synchronized list model shared by every table screen.
//!
//! A list screen's durable state is its query string: search term, created-at
//! day filter, page and page size. [`ListQuery`] is the parsed form of that
//! state, [`Page`] is one fetched batch of records, and
//! [`controller::ListController`] ties the two together for a presentation
//! layer.

use chrono::NaiveDate;

pub mod codec;
pub mod controller;

pub use controller::{FetchTicket, ListController};

/// Page size applied when the query string does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Canonical filter/pagination state of a list screen.
///
/// Invariants: `page >= 1`, `limit >= 1`, `search_term` is trimmed and never
/// a "null" sentinel (empty means no filter), `created_at` names a calendar
/// day, not an instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub created_at: Option<NaiveDate>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            created_at: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term. Changing the filter always snaps back to the
    /// first page.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into().trim().to_string();
        self.page = 1;
        self
    }

    /// Sets the created-at day filter, snapping back to the first page.
    pub fn with_created_at(mut self, day: Option<NaiveDate>) -> Self {
        self.created_at = day;
        self.page = 1;
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = page.max(1);
        self.limit = limit.max(1);
        self
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }
}

/// One fetched batch of records plus total-page-count metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total_pages: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_pages: 1,
        }
    }
}

impl<T> Page<T> {
    pub fn new(records: Vec<T>, total_pages: usize) -> Self {
        Self {
            records,
            // The collaborator reports at least one (possibly empty) page.
            total_pages: total_pages.max(1),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            records: self.records.into_iter().map(f).collect(),
            total_pages: self.total_pages,
        }
    }
}
