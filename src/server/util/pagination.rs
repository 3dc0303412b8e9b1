//! Fixed-size paging over a user's active records.

use crate::server::{
    model::kind::EntityKind,
    util::links::{aggregate_path, page_path},
};

/// Zero-based page of `page_size` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Rows to skip, or `None` when the page lies beyond any offset SQL can express.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Navigation for a page that came back with `len` records.
    pub fn links(&self, kind: EntityKind, len: usize) -> PageLinks {
        let prev = (self.page > 0).then(|| page_path(kind, self.page - 1));
        let next = (len as u64 == self.page_size).then(|| page_path(kind, self.page + 1));
        let aggr = (kind.has_aggregate() && len > 0).then(|| aggregate_path(kind, self.page));

        PageLinks { prev, next, aggr }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub aggr: Option<String>,
}
