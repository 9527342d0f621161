//! `PostgreSQL` repository implementation for catalog entries.

use std::marker::PhantomData;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use tracing::{debug, info};

use super::{models::CatalogRow, sql};
use crate::catalog::{
    domain::{Brand, CatalogEntry, CatalogKind, CatalogName, Platform},
    ports::CatalogRepository,
};
use crate::error::{RepositoryError, RepositoryResult};
use crate::ids::EntityId;
use crate::listing::{KeywordPattern, Pagination};
use crate::storage::postgres::{
    CountRow, PgPool, RowLock, TransactionSettings, in_transaction, probe_visible, run_blocking,
    to_bigint,
};

/// `PostgreSQL`-backed brand repository.
pub type PostgresBrandRepository = PostgresCatalogRepository<Brand>;

/// `PostgreSQL`-backed platform repository.
pub type PostgresPlatformRepository = PostgresCatalogRepository<Platform>;

/// `PostgreSQL`-backed catalog repository for entries of type `E`.
///
/// Each operation runs in its own transaction on a pooled connection.
#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository<E> {
    pool: PgPool,
    settings: TransactionSettings,
    entry: PhantomData<fn() -> E>,
}

impl<E: CatalogEntry> PostgresCatalogRepository<E> {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self::with_settings(pool, TransactionSettings::new())
    }

    /// Creates a repository applying `settings` to every transaction.
    #[must_use]
    pub const fn with_settings(pool: PgPool, settings: TransactionSettings) -> Self {
        Self {
            pool,
            settings,
            entry: PhantomData,
        }
    }
}

#[async_trait]
impl<E: CatalogEntry> CatalogRepository<E> for PostgresCatalogRepository<E> {
    async fn list(
        &self,
        keyword: &KeywordPattern,
        pagination: Pagination,
    ) -> RepositoryResult<Vec<E>> {
        let pattern = keyword.sql_pattern();
        let limit = to_bigint(pagination.limit());
        let offset = to_bigint(pagination.offset());
        let settings = self.settings;
        debug!(table = E::KIND.table(), %pattern, limit, offset, "listing catalog entries");

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                let rows = diesel::sql_query(sql::list(E::KIND))
                    .bind::<Text, _>(pattern.as_str())
                    .bind::<BigInt, _>(limit)
                    .bind::<BigInt, _>(offset)
                    .load::<CatalogRow>(tx)?;
                Ok(rows.into_iter().map(CatalogRow::into_entry).collect())
            })
        })
        .await
    }

    async fn count(&self, keyword: &KeywordPattern) -> RepositoryResult<u64> {
        let pattern = keyword.sql_pattern();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                diesel::sql_query(sql::count(E::KIND))
                    .bind::<Text, _>(pattern.as_str())
                    .get_result::<CountRow>(tx)?
                    .value()
            })
        })
        .await
    }

    async fn get(&self, id: E::Id) -> RepositoryResult<E> {
        let raw_id = id.into_raw();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                diesel::sql_query(sql::get(E::KIND))
                    .bind::<BigInt, _>(raw_id)
                    .get_result::<CatalogRow>(tx)
                    .optional()?
                    .map(CatalogRow::into_entry)
                    .ok_or_else(|| RepositoryError::not_found(E::KIND.table()))
            })
        })
        .await
    }

    async fn create(&self, name: &CatalogName) -> RepositoryResult<E> {
        let owned_name = name.as_str().to_owned();
        let settings = self.settings;

        let created: E = run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                let row = diesel::sql_query(sql::insert(E::KIND))
                    .bind::<Text, _>(owned_name.as_str())
                    .get_result::<CatalogRow>(tx)?;
                Ok(row.into_entry())
            })
        })
        .await?;

        info!(table = E::KIND.table(), id = created.id().into_raw(), "catalog entry created");
        Ok(created)
    }

    async fn update(&self, id: E::Id, name: &CatalogName) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        let owned_name = name.as_str().to_owned();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                ensure_target_visible(tx, E::KIND, raw_id)?;
                cancellation.checkpoint()?;
                diesel::sql_query(sql::rename(E::KIND))
                    .bind::<Text, _>(owned_name.as_str())
                    .bind::<BigInt, _>(raw_id)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await?;

        info!(table = E::KIND.table(), id = raw_id, "catalog entry renamed");
        Ok(())
    }

    async fn delete(&self, id: E::Id) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                ensure_target_visible(tx, E::KIND, raw_id)?;
                cancellation.checkpoint()?;
                diesel::sql_query(sql::soft_delete(E::KIND))
                    .bind::<BigInt, _>(raw_id)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await?;

        info!(table = E::KIND.table(), id = raw_id, "catalog entry soft-deleted");
        Ok(())
    }
}

fn ensure_target_visible(
    connection: &mut PgConnection,
    kind: CatalogKind,
    id: i64,
) -> RepositoryResult<()> {
    if probe_visible(connection, kind.table(), kind.id_column(), id, RowLock::Update)? {
        Ok(())
    } else {
        Err(RepositoryError::target_not_visible(kind.noun(), id))
    }
}
