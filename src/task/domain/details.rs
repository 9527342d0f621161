//! Task read model with joined brand and platform names.

use super::{Payment, TaskDraft, TaskId, TaskStatus};
use crate::catalog::domain::{BrandId, PlatformId};
use crate::listing::Collection;
use chrono::NaiveDate;
use serde::Serialize;

/// A visible task together with the names of its brand and platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetails {
    task_id: TaskId,
    title: String,
    brand_id: BrandId,
    brand: String,
    platform_id: PlatformId,
    platform: String,
    due_date: NaiveDate,
    payment: Payment,
    status: TaskStatus,
}

impl Collection for TaskDetails {
    const COLLECTION_NAME: &'static str = "tasks";
}

impl TaskDetails {
    /// Joins a stored draft with the names of the rows it references.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        draft: &TaskDraft,
        brand: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            title: draft.title().as_str().to_owned(),
            brand_id: draft.brand_id(),
            brand: brand.into(),
            platform_id: draft.platform_id(),
            platform: platform.into(),
            due_date: draft.due_date(),
            payment: draft.payment().clone(),
            status: draft.status(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the referenced brand.
    #[must_use]
    pub const fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    /// Returns the brand name.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the referenced platform.
    #[must_use]
    pub const fn platform_id(&self) -> PlatformId {
        self.platform_id
    }

    /// Returns the platform name.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the payment amount.
    #[must_use]
    pub const fn payment(&self) -> &Payment {
        &self.payment
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}
