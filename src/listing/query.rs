//! Raw list query shape and its validation.

use super::{KeywordPattern, Pagination};
use thiserror::Error;

/// Longest accepted search keyword, in characters.
pub const MAX_KEYWORD_LENGTH: usize = 100;

/// Largest accepted page size.
pub const MAX_LIMIT: u64 = 100;

/// Errors raised while validating a [`ListQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListQueryError {
    /// The keyword exceeds [`MAX_KEYWORD_LENGTH`] characters.
    #[error("keyword value must be at most {max} characters", max = MAX_KEYWORD_LENGTH)]
    KeywordTooLong,

    /// The limit exceeds [`MAX_LIMIT`].
    #[error("limit value must be at most {max}", max = MAX_LIMIT)]
    LimitTooLarge(u64),
}

/// Keyword search with optional pagination, as received from a caller.
///
/// A zero `limit` or `page` means the value was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    keyword: String,
    limit: u64,
    page: u64,
}

impl ListQuery {
    /// Creates an unfiltered query with default pagination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the one-based page number.
    #[must_use]
    pub const fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Validates the query and resolves its keyword and pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ListQueryError`] when the keyword or limit is out of range.
    pub fn resolve(&self) -> Result<(KeywordPattern, Pagination), ListQueryError> {
        if self.keyword.chars().count() > MAX_KEYWORD_LENGTH {
            return Err(ListQueryError::KeywordTooLong);
        }
        if self.limit > MAX_LIMIT {
            return Err(ListQueryError::LimitTooLarge(self.limit));
        }
        Ok((
            KeywordPattern::new(&self.keyword),
            Pagination::resolve(self.limit, self.page),
        ))
    }
}
