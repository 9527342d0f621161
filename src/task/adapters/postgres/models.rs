//! Diesel row models for task queries.

use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Date, Nullable, Text};

use crate::catalog::domain::{BrandId, PlatformId};
use crate::error::{RepositoryError, RepositoryResult};
use crate::task::domain::{Payment, TaskDetails, TaskDraft, TaskId, TaskStatus, TaskTitle};

/// Task row joined with its brand and platform names.
///
/// The joins are outer joins, so the names are nullable at the type level.
#[derive(Debug, Clone, QueryableByName)]
pub(super) struct TaskRow {
    #[diesel(sql_type = BigInt)]
    pub task_id: i64,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = BigInt)]
    pub brand_id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    pub brand: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub platform_id: i64,
    #[diesel(sql_type = Nullable<Text>)]
    pub platform: Option<String>,
    #[diesel(sql_type = Date)]
    pub due_date: NaiveDate,
    #[diesel(sql_type = Text)]
    pub payment: String,
    #[diesel(sql_type = Text)]
    pub status: String,
}

impl TaskRow {
    /// Converts the row into the task read model.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when a stored value no
    /// longer satisfies domain validation or a joined name is missing.
    pub(super) fn into_details(self) -> RepositoryResult<TaskDetails> {
        let draft = TaskDraft::new(
            TaskTitle::new(self.title).map_err(RepositoryError::persistence)?,
            BrandId::new(self.brand_id),
            PlatformId::new(self.platform_id),
            self.due_date,
            Payment::new(self.payment).map_err(RepositoryError::persistence)?,
            TaskStatus::try_from(self.status.as_str()).map_err(RepositoryError::persistence)?,
        );
        let brand = self.brand.ok_or_else(|| missing_join("brand", self.brand_id))?;
        let platform = self
            .platform
            .ok_or_else(|| missing_join("platform", self.platform_id))?;
        Ok(TaskDetails::new(
            TaskId::new(self.task_id),
            &draft,
            brand,
            platform,
        ))
    }
}

fn missing_join(entity: &str, id: i64) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(format!(
        "task references {entity} {id}, which has no row"
    )))
}
