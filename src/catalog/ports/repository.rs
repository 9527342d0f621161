//! Repository port for catalog entries.

use crate::catalog::domain::{CatalogEntry, CatalogName};
use crate::error::RepositoryResult;
use crate::listing::{KeywordPattern, Pagination};
use async_trait::async_trait;

/// Catalog persistence contract.
///
/// Soft-deleted rows are invisible to every operation.
#[async_trait]
pub trait CatalogRepository<E: CatalogEntry>: Send + Sync {
    /// Returns one page of visible entries whose name matches `keyword`,
    /// ordered by identity.
    async fn list(
        &self,
        keyword: &KeywordPattern,
        pagination: Pagination,
    ) -> RepositoryResult<Vec<E>>;

    /// Counts visible entries whose name matches `keyword`.
    async fn count(&self, keyword: &KeywordPattern) -> RepositoryResult<u64>;

    /// Finds a visible entry by identity.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RepositoryError::NotFound`] when no visible
    /// entry has `id`.
    async fn get(&self, id: E::Id) -> RepositoryResult<E>;

    /// Inserts a new entry. Duplicate names are accepted.
    async fn create(&self, name: &CatalogName) -> RepositoryResult<E>;

    /// Renames a visible entry and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::InvariantViolation::TargetNotVisible`] when no
    /// visible entry has `id`; nothing is written.
    async fn update(&self, id: E::Id, name: &CatalogName) -> RepositoryResult<()>;

    /// Soft-deletes a visible entry by setting `deleted_at`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::InvariantViolation::TargetNotVisible`] when no
    /// visible entry has `id`, including one that is already deleted.
    async fn delete(&self, id: E::Id) -> RepositoryResult<()>;
}
