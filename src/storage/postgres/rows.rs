//! Scalar result rows shared by raw SQL queries.

use diesel::QueryableByName;
use diesel::sql_types::BigInt;

use crate::error::{RepositoryError, RepositoryResult};

/// Single identity column aliased as `id`.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub(crate) struct IdRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
}

/// Aggregate count aliased as `count`.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub(crate) struct CountRow {
    #[diesel(sql_type = BigInt)]
    pub count: i64,
}

impl CountRow {
    /// Returns the count as an unsigned value.
    pub(crate) fn value(self) -> RepositoryResult<u64> {
        u64::try_from(self.count).map_err(RepositoryError::persistence)
    }
}

/// Converts an unsigned pagination value into a `BIGINT` bind parameter.
///
/// Values past `i64::MAX` clamp to it; as an offset that selects no rows.
pub(crate) fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
