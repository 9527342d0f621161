//! List output with pagination metadata.

use super::{Pagination, total_pages};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Types listed under a named JSON collection, e.g. `brands`.
pub trait Collection {
    /// Key the items are serialized under.
    const COLLECTION_NAME: &'static str;
}

/// Pagination metadata reported with every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ListPagination {
    /// Effective page size.
    pub limit: u64,
    /// Effective one-based page number.
    pub page: u64,
    /// Page count as computed by [`total_pages`].
    pub total_page: u64,
}

impl ListPagination {
    /// Builds metadata from the effective pagination and the total match count.
    #[must_use]
    pub const fn new(pagination: Pagination, total_items: u64) -> Self {
        Self {
            limit: pagination.limit(),
            page: pagination.page(),
            total_page: total_pages(total_items, pagination.limit()),
        }
    }
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<T> {
    items: Vec<T>,
    meta: ListPagination,
}

impl<T> ListPage<T> {
    /// Creates a page from its items and metadata.
    #[must_use]
    pub const fn new(items: Vec<T>, meta: ListPagination) -> Self {
        Self { items, meta }
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the pagination metadata.
    #[must_use]
    pub const fn meta(&self) -> ListPagination {
        self.meta
    }
}

impl<T> Serialize for ListPage<T>
where
    T: Collection + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(T::COLLECTION_NAME, &self.items)?;
        map.serialize_entry("meta", &self.meta)?;
        map.end()
    }
}
