//! Existence probes run inside write transactions.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use super::rows::IdRow;
use crate::error::RepositoryResult;

/// Row lock taken by an existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowLock {
    /// Blocks concurrent updates and deletes of a referenced row until commit.
    Share,
    /// Blocks every concurrent writer of the target row until commit.
    Update,
}

impl RowLock {
    const fn clause(self) -> &'static str {
        match self {
            Self::Share => "FOR SHARE",
            Self::Update => "FOR UPDATE",
        }
    }
}

/// Returns `true` when `table` holds a row with `id` that is not
/// soft-deleted, locking it for the rest of the transaction.
pub(crate) fn probe_visible(
    connection: &mut PgConnection,
    table: &str,
    id_column: &str,
    id: i64,
    lock: RowLock,
) -> RepositoryResult<bool> {
    let sql = format!(
        "SELECT {id_column} AS id FROM {table} WHERE {id_column} = $1 AND deleted_at IS NULL {}",
        lock.clause()
    );
    let row = diesel::sql_query(sql)
        .bind::<BigInt, _>(id)
        .get_result::<IdRow>(connection)
        .optional()?;
    Ok(row.is_some())
}
