//! In-memory task repository backed by the shared [`InMemoryDatabase`].

use async_trait::async_trait;
use tracing::debug;

use crate::error::{RepositoryError, RepositoryResult};
use crate::ids::EntityId;
use crate::listing::{KeywordPattern, Pagination};
use crate::storage::memory::{InMemoryDatabase, TableName, Tables};
use crate::task::{
    domain::{TaskDetails, TaskDraft, TaskId},
    ports::TaskRepository,
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    database: InMemoryDatabase,
}

impl InMemoryTaskRepository {
    /// Creates a repository over `database`.
    #[must_use]
    pub const fn new(database: InMemoryDatabase) -> Self {
        Self { database }
    }
}

/// Joins a stored task with its brand and platform names, if both are
/// visible.
fn join(tables: &Tables, id: i64, draft: &TaskDraft) -> Option<TaskDetails> {
    let brand = tables.brands.visible(draft.brand_id().into_raw())?;
    let platform = tables.platforms.visible(draft.platform_id().into_raw())?;
    Some(TaskDetails::new(
        TaskId::from_raw(id),
        draft,
        brand.as_str(),
        platform.as_str(),
    ))
}

fn visible_matches<'a>(
    tables: &'a Tables,
    keyword: &'a KeywordPattern,
) -> impl Iterator<Item = TaskDetails> + 'a {
    tables
        .tasks
        .visible_rows()
        .filter(|(_, draft)| keyword.matches(draft.title().as_str()))
        .filter_map(|(id, draft)| join(tables, id, draft))
}

fn ensure_references_visible(tables: &Tables, draft: &TaskDraft) -> RepositoryResult<()> {
    if tables.brands.visible(draft.brand_id().into_raw()).is_none() {
        return Err(RepositoryError::missing_reference("brand_id"));
    }
    if tables
        .platforms
        .visible(draft.platform_id().into_raw())
        .is_none()
    {
        return Err(RepositoryError::missing_reference("platform_id"));
    }
    Ok(())
}

fn ensure_target_visible(tables: &Tables, id: i64) -> RepositoryResult<()> {
    tables
        .tasks
        .visible(id)
        .and_then(|draft| join(tables, id, draft))
        .map(|_| ())
        .ok_or_else(|| RepositoryError::target_not_visible("task", id))
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(
        &self,
        keyword: &KeywordPattern,
        pagination: Pagination,
    ) -> RepositoryResult<Vec<TaskDetails>> {
        debug!(table = %TableName::Tasks, "listing in-memory tasks");
        self.database.read(|tables| {
            Ok(visible_matches(tables, keyword)
                .skip(to_usize(pagination.offset()))
                .take(to_usize(pagination.limit()))
                .collect())
        })
    }

    async fn count(&self, keyword: &KeywordPattern) -> RepositoryResult<u64> {
        self.database.read(|tables| {
            u64::try_from(visible_matches(tables, keyword).count())
                .map_err(RepositoryError::persistence)
        })
    }

    async fn get(&self, id: TaskId) -> RepositoryResult<TaskDetails> {
        let raw_id = id.into_raw();
        self.database.read(|tables| {
            tables
                .tasks
                .visible(raw_id)
                .and_then(|draft| join(tables, raw_id, draft))
                .ok_or_else(|| RepositoryError::not_found(TableName::Tasks.as_str()))
        })
    }

    async fn create(&self, draft: &TaskDraft) -> RepositoryResult<TaskId> {
        self.database.write(|tables, now| {
            ensure_references_visible(tables, draft)?;
            tables.write_checkpoint(TableName::Tasks)?;
            Ok(TaskId::from_raw(tables.tasks.insert(draft.clone(), now)))
        })
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        self.database.write(|tables, now| {
            ensure_references_visible(tables, draft)?;
            ensure_target_visible(tables, raw_id)?;
            tables.write_checkpoint(TableName::Tasks)?;
            tables.tasks.replace(raw_id, draft.clone(), now);
            Ok(())
        })
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let raw_id = id.into_raw();
        self.database.write(|tables, now| {
            ensure_target_visible(tables, raw_id)?;
            tables.write_checkpoint(TableName::Tasks)?;
            tables.tasks.soft_delete(raw_id, now);
            Ok(())
        })
    }
}
