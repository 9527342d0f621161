//! Diesel row models for catalog queries.

use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Text};

use crate::catalog::domain::CatalogEntry;
use crate::ids::EntityId;

/// Query result row for catalog entries, with columns aliased to
/// `id` and `name`.
#[derive(Debug, Clone, QueryableByName)]
pub(super) struct CatalogRow {
    /// Identity key.
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    /// Entry name.
    #[diesel(sql_type = Text)]
    pub name: String,
}

impl CatalogRow {
    /// Converts the row into a domain entry.
    pub(super) fn into_entry<E: CatalogEntry>(self) -> E {
        E::from_parts(E::Id::from_raw(self.id), self.name)
    }
}
