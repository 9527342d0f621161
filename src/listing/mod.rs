//! Keyword search and pagination shared by every list operation.
//!
//! - [`KeywordPattern`] turns a free-text search term into a
//!   case-insensitive "contains" match.
//! - [`Pagination`] resolves limit/page defaults and page counts.
//! - [`ListQuery`] is the raw query shape accepted by list services.
//! - [`ListPage`] is the output of list services.

mod keyword;
mod page;
mod pagination;
mod query;

pub use keyword::KeywordPattern;
pub use page::{Collection, ListPage, ListPagination};
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, Pagination, total_pages};
pub use query::{ListQuery, ListQueryError, MAX_KEYWORD_LENGTH, MAX_LIMIT};
