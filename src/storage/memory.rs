//! Thread-safe in-memory database backing the in-memory repositories.
//!
//! Rows keep the same lifecycle as the `PostgreSQL` tables: identity keys,
//! `created_at`/`updated_at` timestamps and a nullable `deleted_at` marking
//! soft deletion. Each repository operation runs under a single lock
//! acquisition, so an operation either applies completely or not at all.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};

use crate::catalog::domain::CatalogKind;
use crate::error::{RepositoryError, RepositoryResult};
use crate::task::domain::TaskDraft;

/// Tables held by the in-memory database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    /// The `brands` table.
    Brands,
    /// The `platforms` table.
    Platforms,
    /// The `tasks` table.
    Tasks,
}

impl TableName {
    /// Returns the table name as `str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brands => "brands",
            Self::Platforms => "platforms",
            Self::Tasks => "tasks",
        }
    }
}

impl From<CatalogKind> for TableName {
    fn from(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Brand => Self::Brands,
            CatalogKind::Platform => Self::Platforms,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle timestamps of a stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTimestamps {
    /// Insertion time.
    pub created_at: DateTime<Utc>,
    /// Time of the latest mutating write.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion time, if the row has been deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct StoredRow<R> {
    data: R,
    timestamps: RowTimestamps,
}

impl<R> StoredRow<R> {
    const fn is_visible(&self) -> bool {
        self.timestamps.deleted_at.is_none()
    }
}

/// One table: rows keyed by identity, in insertion order.
#[derive(Debug)]
pub(crate) struct Table<R> {
    rows: BTreeMap<i64, StoredRow<R>>,
    last_id: i64,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<R> Table<R> {
    /// Inserts a row and returns its new identity.
    pub(crate) fn insert(&mut self, data: R, now: DateTime<Utc>) -> i64 {
        self.last_id = self.last_id.saturating_add(1);
        let timestamps = RowTimestamps {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.rows.insert(self.last_id, StoredRow { data, timestamps });
        self.last_id
    }

    /// Returns the row with `id` unless it is missing or soft-deleted.
    pub(crate) fn visible(&self, id: i64) -> Option<&R> {
        self.rows
            .get(&id)
            .filter(|row| row.is_visible())
            .map(|row| &row.data)
    }

    /// Iterates over rows that are not soft-deleted, ordered by identity.
    pub(crate) fn visible_rows(&self) -> impl Iterator<Item = (i64, &R)> {
        self.rows
            .iter()
            .filter(|(_, row)| row.is_visible())
            .map(|(id, row)| (*id, &row.data))
    }

    /// Replaces a visible row's data and refreshes `updated_at`.
    ///
    /// Returns `false` when no visible row has `id`.
    pub(crate) fn replace(&mut self, id: i64, data: R, now: DateTime<Utc>) -> bool {
        let Some(row) = self.rows.get_mut(&id).filter(|row| row.is_visible()) else {
            return false;
        };
        row.data = data;
        row.timestamps.updated_at = now;
        true
    }

    /// Marks a visible row deleted.
    ///
    /// Returns `false` when no visible row has `id`.
    pub(crate) fn soft_delete(&mut self, id: i64, now: DateTime<Utc>) -> bool {
        let Some(row) = self.rows.get_mut(&id).filter(|row| row.is_visible()) else {
            return false;
        };
        row.timestamps.deleted_at = Some(now);
        row.timestamps.updated_at = now;
        true
    }

    fn timestamps(&self, id: i64) -> Option<RowTimestamps> {
        self.rows.get(&id).map(|row| row.timestamps)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// All tables of the in-memory database.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) brands: Table<String>,
    pub(crate) platforms: Table<String>,
    pub(crate) tasks: Table<TaskDraft>,
    faults: HashSet<TableName>,
}

impl Tables {
    /// Returns the catalog table for `kind`.
    pub(crate) const fn catalog(&self, kind: CatalogKind) -> &Table<String> {
        match kind {
            CatalogKind::Brand => &self.brands,
            CatalogKind::Platform => &self.platforms,
        }
    }

    /// Returns the catalog table for `kind`, mutably.
    pub(crate) const fn catalog_mut(&mut self, kind: CatalogKind) -> &mut Table<String> {
        match kind {
            CatalogKind::Brand => &mut self.brands,
            CatalogKind::Platform => &mut self.platforms,
        }
    }

    /// Fails once for each injected fault on `table`.
    ///
    /// Repositories call this immediately before their final write, after
    /// every check has passed.
    pub(crate) fn write_checkpoint(&mut self, table: TableName) -> RepositoryResult<()> {
        if self.faults.remove(&table) {
            return Err(RepositoryError::persistence(std::io::Error::other(format!(
                "injected write failure on {table}"
            ))));
        }
        Ok(())
    }

    fn table_len(&self, table: TableName) -> usize {
        match table {
            TableName::Brands => self.brands.len(),
            TableName::Platforms => self.platforms.len(),
            TableName::Tasks => self.tasks.len(),
        }
    }

    fn timestamps(&self, table: TableName, id: i64) -> Option<RowTimestamps> {
        match table {
            TableName::Brands => self.brands.timestamps(id),
            TableName::Platforms => self.platforms.timestamps(id),
            TableName::Tasks => self.tasks.timestamps(id),
        }
    }
}

/// Shared in-memory database.
///
/// Clones share the same tables.
#[derive(Clone)]
pub struct InMemoryDatabase {
    state: Arc<RwLock<Tables>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryDatabase {
    /// Creates an empty database stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty database stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Tables::default())),
            clock,
        }
    }

    /// Runs `f` under a shared lock.
    pub(crate) fn read<T>(
        &self,
        f: impl FnOnce(&Tables) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let state = self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        f(&state)
    }

    /// Runs `f` under an exclusive lock with the current time.
    pub(crate) fn write<T>(
        &self,
        f: impl FnOnce(&mut Tables, DateTime<Utc>) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let mut state = self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        f(&mut state, self.clock.utc())
    }

    /// Returns the timestamps of a row, including soft-deleted rows.
    #[must_use]
    pub fn timestamps(&self, table: TableName, id: i64) -> Option<RowTimestamps> {
        self.lock_for_inspection().timestamps(table, id)
    }

    /// Returns the number of physically stored rows, including soft-deleted
    /// rows.
    #[must_use]
    pub fn physical_row_count(&self, table: TableName) -> usize {
        self.lock_for_inspection().table_len(table)
    }

    /// Makes the next final write to `table` fail after its checks pass.
    pub fn inject_write_failure(&self, table: TableName) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .faults
            .insert(table);
    }

    fn lock_for_inspection(&self) -> std::sync::RwLockReadGuard<'_, Tables> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryDatabase")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
