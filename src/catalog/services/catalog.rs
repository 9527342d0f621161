//! Service layer for listing, reading and writing catalog entries.

use std::marker::PhantomData;
use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use crate::catalog::{
    domain::{Brand, CatalogDomainError, CatalogEntry, CatalogName, Platform},
    ports::CatalogRepository,
};
use crate::error::{Classified, ErrorKind, RepositoryError};
use crate::listing::{ListPage, ListPagination, ListQuery, ListQueryError};

/// Service-level errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// The entry name failed validation.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),
    /// The list query failed validation.
    #[error(transparent)]
    Query(#[from] ListQueryError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl Classified for CatalogServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::Query(_) => ErrorKind::InvariantViolation,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for catalog service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Brand service over repository `R`.
pub type BrandService<R> = CatalogService<Brand, R>;

/// Platform service over repository `R`.
pub type PlatformService<R> = CatalogService<Platform, R>;

/// Catalog orchestration service for entries of type `E`.
pub struct CatalogService<E, R> {
    repository: Arc<R>,
    entry: PhantomData<fn() -> E>,
}

impl<E, R> Clone for CatalogService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            entry: PhantomData,
        }
    }
}

impl<E, R> CatalogService<E, R>
where
    E: CatalogEntry,
    R: CatalogRepository<E>,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            entry: PhantomData,
        }
    }

    /// Lists entries matching the query keyword, one page at a time.
    ///
    /// Missing pagination values default to 25 entries on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Query`] when the query is out of range
    /// or [`CatalogServiceError::Repository`] when a lookup fails.
    #[instrument(level = "debug", skip(self), fields(table = E::KIND.table()))]
    pub async fn list(&self, query: &ListQuery) -> CatalogServiceResult<ListPage<E>> {
        let (keyword, pagination) = query.resolve()?;
        let items = self.repository.list(&keyword, pagination).await?;
        let total_items = self.repository.count(&keyword).await?;
        Ok(ListPage::new(
            items,
            ListPagination::new(pagination, total_items),
        ))
    }

    /// Retrieves a visible entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] wrapping
    /// [`RepositoryError::NotFound`] when the entry is missing or deleted.
    pub async fn get(&self, id: E::Id) -> CatalogServiceResult<E> {
        Ok(self.repository.get(id).await?)
    }

    /// Creates an entry and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Domain`] when the name is invalid or
    /// [`CatalogServiceError::Repository`] when persistence fails.
    #[instrument(level = "debug", skip(self, name), fields(table = E::KIND.table()))]
    pub async fn create(&self, name: &str) -> CatalogServiceResult<E> {
        let validated = CatalogName::new(name)?;
        Ok(self.repository.create(&validated).await?)
    }

    /// Renames a visible entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Domain`] when the name is invalid or
    /// [`CatalogServiceError::Repository`] wrapping an invariant violation
    /// when the entry is missing or deleted.
    #[instrument(level = "debug", skip(self, name), fields(table = E::KIND.table()))]
    pub async fn update(&self, id: E::Id, name: &str) -> CatalogServiceResult<()> {
        let validated = CatalogName::new(name)?;
        Ok(self.repository.update(id, &validated).await?)
    }

    /// Soft-deletes a visible entry.
    ///
    /// Deleting twice fails: the second call sees no visible entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Repository`] wrapping an invariant
    /// violation when the entry is missing or already deleted.
    #[instrument(level = "debug", skip(self), fields(table = E::KIND.table()))]
    pub async fn delete(&self, id: E::Id) -> CatalogServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
