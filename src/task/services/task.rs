//! Service layer for listing, reading and writing tasks.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use super::TaskRequest;
use crate::error::{Classified, ErrorKind, RepositoryError};
use crate::listing::{ListPage, ListPagination, ListQuery, ListQueryError};
use crate::task::{
    domain::{TaskDetails, TaskDomainError, TaskId},
    ports::TaskRepository,
};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A request field failed validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The list query failed validation.
    #[error(transparent)]
    Query(#[from] ListQueryError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl Classified for TaskServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::Query(_) => ErrorKind::InvariantViolation,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R> {
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists tasks whose title matches the query keyword.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Query`] when the query is out of range or
    /// [`TaskServiceError::Repository`] when a lookup fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn list(&self, query: &ListQuery) -> TaskServiceResult<ListPage<TaskDetails>> {
        let (keyword, pagination) = query.resolve()?;
        let items = self.repository.list(&keyword, pagination).await?;
        let total_items = self.repository.count(&keyword).await?;
        Ok(ListPage::new(
            items,
            ListPagination::new(pagination, total_items),
        ))
    }

    /// Retrieves a visible task with its brand and platform names.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`RepositoryError::NotFound`] when the task is not visible.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<TaskDetails> {
        Ok(self.repository.get(id).await?)
    }

    /// Creates a task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a field is malformed, or
    /// [`TaskServiceError::Repository`] wrapping an invariant violation when
    /// the brand or platform is not visible.
    #[instrument(level = "debug", skip(self, request))]
    pub async fn create(&self, request: &TaskRequest) -> TaskServiceResult<TaskId> {
        let draft = request.to_draft()?;
        Ok(self.repository.create(&draft).await?)
    }

    /// Replaces every writable field of a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a field is malformed, or
    /// [`TaskServiceError::Repository`] wrapping an invariant violation when
    /// a reference or the task itself is not visible.
    #[instrument(level = "debug", skip(self, request))]
    pub async fn update(&self, id: TaskId, request: &TaskRequest) -> TaskServiceResult<()> {
        let draft = request.to_draft()?;
        Ok(self.repository.update(id, &draft).await?)
    }

    /// Soft-deletes a visible task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping an invariant
    /// violation when the task is missing or already deleted.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
