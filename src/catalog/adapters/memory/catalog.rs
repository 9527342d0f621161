//! In-memory catalog repository backed by the shared [`InMemoryDatabase`].

use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{
    domain::{Brand, CatalogEntry, CatalogName, Platform},
    ports::CatalogRepository,
};
use crate::error::{RepositoryError, RepositoryResult};
use crate::ids::EntityId;
use crate::listing::{KeywordPattern, Pagination};
use crate::storage::memory::{InMemoryDatabase, TableName};

/// In-memory brand repository.
pub type InMemoryBrandRepository = InMemoryCatalogRepository<Brand>;

/// In-memory platform repository.
pub type InMemoryPlatformRepository = InMemoryCatalogRepository<Platform>;

/// Thread-safe in-memory catalog repository for entries of type `E`.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository<E> {
    database: InMemoryDatabase,
    entry: PhantomData<fn() -> E>,
}

impl<E: CatalogEntry> InMemoryCatalogRepository<E> {
    /// Creates a repository over `database`.
    #[must_use]
    pub const fn new(database: InMemoryDatabase) -> Self {
        Self {
            database,
            entry: PhantomData,
        }
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl<E: CatalogEntry> CatalogRepository<E> for InMemoryCatalogRepository<E> {
    async fn list(
        &self,
        keyword: &KeywordPattern,
        pagination: Pagination,
    ) -> RepositoryResult<Vec<E>> {
        debug!(table = E::KIND.table(), "listing in-memory catalog entries");
        self.database.read(|tables| {
            Ok(tables
                .catalog(E::KIND)
                .visible_rows()
                .filter(|(_, name)| keyword.matches(name))
                .skip(to_usize(pagination.offset()))
                .take(to_usize(pagination.limit()))
                .map(|(id, name)| E::from_parts(E::Id::from_raw(id), name.clone()))
                .collect())
        })
    }

    async fn count(&self, keyword: &KeywordPattern) -> RepositoryResult<u64> {
        self.database.read(|tables| {
            let count = tables
                .catalog(E::KIND)
                .visible_rows()
                .filter(|(_, name)| keyword.matches(name))
                .count();
            u64::try_from(count).map_err(RepositoryError::persistence)
        })
    }

    async fn get(&self, id: E::Id) -> RepositoryResult<E> {
        self.database.read(|tables| {
            tables
                .catalog(E::KIND)
                .visible(id.into_raw())
                .map(|name| E::from_parts(id, name.clone()))
                .ok_or_else(|| RepositoryError::not_found(E::KIND.table()))
        })
    }

    async fn create(&self, name: &CatalogName) -> RepositoryResult<E> {
        self.database.write(|tables, now| {
            tables.write_checkpoint(TableName::from(E::KIND))?;
            let raw_id = tables
                .catalog_mut(E::KIND)
                .insert(name.as_str().to_owned(), now);
            Ok(E::from_parts(E::Id::from_raw(raw_id), name.as_str().to_owned()))
        })
    }

    async fn update(&self, id: E::Id, name: &CatalogName) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        self.database.write(|tables, now| {
            if tables.catalog(E::KIND).visible(raw_id).is_none() {
                return Err(RepositoryError::target_not_visible(E::KIND.noun(), raw_id));
            }
            tables.write_checkpoint(TableName::from(E::KIND))?;
            tables
                .catalog_mut(E::KIND)
                .replace(raw_id, name.as_str().to_owned(), now);
            Ok(())
        })
    }

    async fn delete(&self, id: E::Id) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        self.database.write(|tables, now| {
            if tables.catalog(E::KIND).visible(raw_id).is_none() {
                return Err(RepositoryError::target_not_visible(E::KIND.noun(), raw_id));
            }
            tables.write_checkpoint(TableName::from(E::KIND))?;
            tables.catalog_mut(E::KIND).soft_delete(raw_id, now);
            Ok(())
        })
    }
}
