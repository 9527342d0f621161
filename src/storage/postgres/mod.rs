//! `PostgreSQL` connection pooling and schema management.

mod blocking;
mod probe;
mod rows;

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::RepositoryResult;

pub use blocking::Cancellation;
pub(crate) use blocking::{in_transaction, run_blocking};
pub(crate) use probe::{RowLock, probe_visible};
pub(crate) use rows::{CountRow, IdRow, to_bigint};

/// `PostgreSQL` connection pool type used by every repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema for brands, platforms and tasks.
pub const SCHEMA_SQL: &str =
    include_str!("../../../migrations/2025-01-06-000000_create_catalog_and_tasks/up.sql");

/// Builds a connection pool for the configured database.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot open its initial connections.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url());
    let pool = Pool::builder()
        .max_size(config.pool_max_size())
        .build(manager)?;
    info!(
        host = config.host(),
        database = config.database(),
        "database pool initialized"
    );
    Ok(pool)
}

/// Applies the schema. Every statement is idempotent.
///
/// # Errors
///
/// Returns the Diesel error raised by the first failing statement.
pub fn apply_schema(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(SCHEMA_SQL)?;
    info!("database schema is up to date");
    Ok(())
}

/// Per-transaction settings applied before the first statement runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionSettings {
    statement_timeout: Option<Duration>,
}

impl TransactionSettings {
    /// Creates settings with no statement timeout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statement_timeout: None,
        }
    }

    /// Aborts (and rolls back) any statement running longer than `timeout`.
    #[must_use]
    pub const fn with_statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = Some(timeout);
        self
    }

    /// Sets or clears the statement timeout.
    #[must_use]
    pub const fn with_optional_statement_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.statement_timeout = timeout;
        self
    }

    /// Returns the configured statement timeout.
    #[must_use]
    pub const fn statement_timeout(self) -> Option<Duration> {
        self.statement_timeout
    }

    fn apply(self, connection: &mut PgConnection) -> RepositoryResult<()> {
        let Some(timeout) = self.statement_timeout else {
            return Ok(());
        };
        // SET does not accept bind parameters; the value is an integer.
        diesel::sql_query(format!(
            "SET LOCAL statement_timeout = {}",
            timeout.as_millis()
        ))
        .execute(connection)?;
        Ok(())
    }
}
