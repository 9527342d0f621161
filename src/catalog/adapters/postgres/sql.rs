//! SQL text for catalog tables.
//!
//! Statements are rendered from the table layout of a [`CatalogKind`];
//! every value is a bind parameter.

use crate::catalog::domain::CatalogKind;

/// `$1` keyword pattern, `$2` limit, `$3` offset.
pub(super) fn list(kind: CatalogKind) -> String {
    let (table, id, name) = columns(kind);
    format!(
        "SELECT {id} AS id, {name} AS name FROM {table} \
         WHERE deleted_at IS NULL AND {name} ILIKE $1 ESCAPE '\\' \
         ORDER BY {id} LIMIT $2 OFFSET $3"
    )
}

/// `$1` keyword pattern.
pub(super) fn count(kind: CatalogKind) -> String {
    let (table, _, name) = columns(kind);
    format!(
        "SELECT COUNT(*) AS count FROM {table} \
         WHERE deleted_at IS NULL AND {name} ILIKE $1 ESCAPE '\\'"
    )
}

/// `$1` identity.
pub(super) fn get(kind: CatalogKind) -> String {
    let (table, id, name) = columns(kind);
    format!(
        "SELECT {id} AS id, {name} AS name FROM {table} \
         WHERE deleted_at IS NULL AND {id} = $1"
    )
}

/// `$1` name.
pub(super) fn insert(kind: CatalogKind) -> String {
    let (table, id, name) = columns(kind);
    format!("INSERT INTO {table} ({name}) VALUES ($1) RETURNING {id} AS id, {name} AS name")
}

/// `$1` name, `$2` identity.
pub(super) fn rename(kind: CatalogKind) -> String {
    let (table, id, name) = columns(kind);
    format!("UPDATE {table} SET {name} = $1, updated_at = NOW() WHERE {id} = $2")
}

/// `$1` identity.
pub(super) fn soft_delete(kind: CatalogKind) -> String {
    let (table, id, _) = columns(kind);
    format!("UPDATE {table} SET deleted_at = NOW(), updated_at = NOW() WHERE {id} = $1")
}

const fn columns(kind: CatalogKind) -> (&'static str, &'static str, &'static str) {
    (kind.table(), kind.id_column(), kind.name_column())
}
