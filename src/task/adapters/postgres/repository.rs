//! `PostgreSQL` repository implementation for tasks.

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Date, Text};
use tracing::{debug, info};

use super::{models::TaskRow, sql};
use crate::catalog::domain::CatalogKind;
use crate::error::{RepositoryError, RepositoryResult};
use crate::ids::EntityId;
use crate::listing::{KeywordPattern, Pagination};
use crate::storage::postgres::{
    CountRow, IdRow, PgPool, RowLock, TransactionSettings, in_transaction, probe_visible,
    run_blocking, to_bigint,
};
use crate::task::{
    domain::{TaskDetails, TaskDraft, TaskId},
    ports::TaskRepository,
};

/// `PostgreSQL`-backed task repository.
///
/// Writes lock the brand and platform they reference `FOR SHARE` so neither
/// can be deleted before the write commits.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
    settings: TransactionSettings,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self::with_settings(pool, TransactionSettings::new())
    }

    /// Creates a repository applying `settings` to every transaction.
    #[must_use]
    pub const fn with_settings(pool: PgPool, settings: TransactionSettings) -> Self {
        Self { pool, settings }
    }
}

/// Owned copy of a draft's columns, movable onto the blocking pool.
#[derive(Debug, Clone)]
struct TaskColumns {
    title: String,
    brand_id: i64,
    platform_id: i64,
    due_date: chrono::NaiveDate,
    payment: String,
    status: &'static str,
}

impl From<&TaskDraft> for TaskColumns {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title().as_str().to_owned(),
            brand_id: draft.brand_id().into_raw(),
            platform_id: draft.platform_id().into_raw(),
            due_date: draft.due_date(),
            payment: draft.payment().as_str().to_owned(),
            status: draft.status().as_str(),
        }
    }
}

fn ensure_references_visible(
    connection: &mut PgConnection,
    columns: &TaskColumns,
) -> RepositoryResult<()> {
    for (kind, id) in [
        (CatalogKind::Brand, columns.brand_id),
        (CatalogKind::Platform, columns.platform_id),
    ] {
        if !probe_visible(connection, kind.table(), kind.id_column(), id, RowLock::Share)? {
            return Err(RepositoryError::missing_reference(kind.id_column()));
        }
    }
    Ok(())
}

fn ensure_target_visible(connection: &mut PgConnection, id: i64) -> RepositoryResult<()> {
    let probe = diesel::sql_query(sql::probe_target())
        .bind::<BigInt, _>(id)
        .get_result::<IdRow>(connection)
        .optional()?;
    probe
        .map(|_| ())
        .ok_or_else(|| RepositoryError::target_not_visible("task", id))
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(
        &self,
        keyword: &KeywordPattern,
        pagination: Pagination,
    ) -> RepositoryResult<Vec<TaskDetails>> {
        let pattern = keyword.sql_pattern();
        let limit = to_bigint(pagination.limit());
        let offset = to_bigint(pagination.offset());
        let settings = self.settings;
        debug!(%pattern, limit, offset, "listing tasks");

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                diesel::sql_query(sql::list())
                    .bind::<Text, _>(pattern.as_str())
                    .bind::<BigInt, _>(limit)
                    .bind::<BigInt, _>(offset)
                    .load::<TaskRow>(tx)?
                    .into_iter()
                    .map(TaskRow::into_details)
                    .collect()
            })
        })
        .await
    }

    async fn count(&self, keyword: &KeywordPattern) -> RepositoryResult<u64> {
        let pattern = keyword.sql_pattern();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                diesel::sql_query(sql::count())
                    .bind::<Text, _>(pattern.as_str())
                    .get_result::<CountRow>(tx)?
                    .value()
            })
        })
        .await
    }

    async fn get(&self, id: TaskId) -> RepositoryResult<TaskDetails> {
        let raw_id = id.into_raw();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                diesel::sql_query(sql::get())
                    .bind::<BigInt, _>(raw_id)
                    .get_result::<TaskRow>(tx)
                    .optional()?
                    .ok_or_else(|| RepositoryError::not_found("tasks"))?
                    .into_details()
            })
        })
        .await
    }

    async fn create(&self, draft: &TaskDraft) -> RepositoryResult<TaskId> {
        let columns = TaskColumns::from(draft);
        let settings = self.settings;

        let created = run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                ensure_references_visible(tx, &columns)?;
                cancellation.checkpoint()?;
                let row = diesel::sql_query(sql::INSERT)
                    .bind::<Text, _>(columns.title.as_str())
                    .bind::<BigInt, _>(columns.brand_id)
                    .bind::<BigInt, _>(columns.platform_id)
                    .bind::<Date, _>(columns.due_date)
                    .bind::<Text, _>(columns.payment.as_str())
                    .bind::<Text, _>(columns.status)
                    .get_result::<IdRow>(tx)?;
                Ok(TaskId::from_raw(row.id))
            })
        })
        .await?;

        info!(id = created.value(), "task created");
        Ok(created)
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        let columns = TaskColumns::from(draft);
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                ensure_references_visible(tx, &columns)?;
                ensure_target_visible(tx, raw_id)?;
                cancellation.checkpoint()?;
                diesel::sql_query(sql::UPDATE)
                    .bind::<Text, _>(columns.title.as_str())
                    .bind::<BigInt, _>(columns.brand_id)
                    .bind::<BigInt, _>(columns.platform_id)
                    .bind::<Date, _>(columns.due_date)
                    .bind::<Text, _>(columns.payment.as_str())
                    .bind::<Text, _>(columns.status)
                    .bind::<BigInt, _>(raw_id)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await?;

        info!(id = raw_id, "task updated");
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        let settings = self.settings;

        run_blocking(&self.pool, move |connection, cancellation| {
            in_transaction(connection, settings, cancellation, |tx| {
                ensure_target_visible(tx, raw_id)?;
                cancellation.checkpoint()?;
                diesel::sql_query(sql::SOFT_DELETE)
                    .bind::<BigInt, _>(raw_id)
                    .execute(tx)?;
                Ok(())
            })
        })
        .await?;

        info!(id = raw_id, "task soft-deleted");
        Ok(())
    }
}
