//! Writable task fields.

use super::{Payment, TaskStatus, TaskTitle};
use crate::catalog::domain::{BrandId, PlatformId};
use chrono::NaiveDate;

/// Every field a create or update writes.
///
/// Holding a draft says nothing about whether the referenced brand and
/// platform exist; repositories check that inside the write transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    brand_id: BrandId,
    platform_id: PlatformId,
    due_date: NaiveDate,
    payment: Payment,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft from validated values.
    #[must_use]
    pub const fn new(
        title: TaskTitle,
        brand_id: BrandId,
        platform_id: PlatformId,
        due_date: NaiveDate,
        payment: Payment,
        status: TaskStatus,
    ) -> Self {
        Self {
            title,
            brand_id,
            platform_id,
            due_date,
            payment,
            status,
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the referenced brand.
    #[must_use]
    pub const fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    /// Returns the referenced platform.
    #[must_use]
    pub const fn platform_id(&self) -> PlatformId {
        self.platform_id
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
