//! Repository port for task persistence and lookup.

use async_trait::async_trait;

use crate::error::RepositoryResult;
use crate::listing::{KeywordPattern, Pagination};
use crate::task::domain::{TaskDetails, TaskDraft, TaskId};

/// Task persistence contract.
///
/// Reads only see tasks that are not soft-deleted and whose brand and
/// platform are not soft-deleted either.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns one page of visible tasks whose title matches `keyword`,
    /// ordered by identity.
    async fn list(
        &self,
        keyword: &KeywordPattern,
        pagination: Pagination,
    ) -> RepositoryResult<Vec<TaskDetails>>;

    /// Counts visible tasks whose title matches `keyword`.
    async fn count(&self, keyword: &KeywordPattern) -> RepositoryResult<u64>;

    /// Finds a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RepositoryError::NotFound`] when no visible
    /// task has `id`.
    async fn get(&self, id: TaskId) -> RepositoryResult<TaskDetails>;

    /// Stores a new task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns a missing-reference invariant violation naming `brand_id` or
    /// `platform_id` when a referenced row is missing or soft-deleted.
    async fn create(&self, draft: &TaskDraft) -> RepositoryResult<TaskId>;

    /// Replaces every writable field of a visible task.
    ///
    /// # Errors
    ///
    /// Returns a missing-reference invariant violation when a referenced row
    /// is not visible, or a target-not-visible invariant violation when the
    /// task itself is not visible.
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> RepositoryResult<()>;

    /// Soft-deletes a visible task.
    ///
    /// # Errors
    ///
    /// Returns a target-not-visible invariant violation when the task is
    /// missing or already deleted.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;
}
