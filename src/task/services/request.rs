//! Raw task fields as received from a caller.

use chrono::NaiveDate;

use crate::catalog::domain::{BrandId, PlatformId};
use crate::task::domain::{Payment, TaskDomainError, TaskDraft, TaskStatus, TaskTitle};

/// Date format accepted for due dates.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Request payload for creating or updating a task.
///
/// Reference keys of `0` are accepted here and rejected later by the
/// repository's existence check, mirroring a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    title: String,
    brand_id: i64,
    platform_id: i64,
    due_date: String,
    payment: String,
    status: String,
}

impl TaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        brand_id: i64,
        platform_id: i64,
        due_date: impl Into<String>,
        payment: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            brand_id,
            platform_id,
            due_date: due_date.into(),
            payment: payment.into(),
            status: status.into(),
        }
    }

    /// Validates every field and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskDomainError`] of the first invalid field, checked in
    /// declaration order.
    pub fn to_draft(&self) -> Result<TaskDraft, TaskDomainError> {
        let title = TaskTitle::new(self.title.as_str())?;
        let brand_id = non_negative("brand_id", self.brand_id)?;
        let platform_id = non_negative("platform_id", self.platform_id)?;
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), DUE_DATE_FORMAT)
            .map_err(|_| TaskDomainError::InvalidDueDate(self.due_date.clone()))?;
        let payment = Payment::new(self.payment.as_str())?;
        let status = TaskStatus::try_from(self.status.as_str())?;
        Ok(TaskDraft::new(
            title,
            BrandId::new(brand_id),
            PlatformId::new(platform_id),
            due_date,
            payment,
            status,
        ))
    }
}

const fn non_negative(field: &'static str, value: i64) -> Result<i64, TaskDomainError> {
    if value < 0 {
        Err(TaskDomainError::NegativeReference { field, value })
    } else {
        Ok(value)
    }
}
