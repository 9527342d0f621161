//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// A reference key is negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeReference {
        /// Name of the referencing field.
        field: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("due_date must be a date formatted as YYYY-MM-DD, got '{0}'")]
    InvalidDueDate(String),

    /// The payment is not a decimal number.
    #[error("payment must be a decimal number, got '{0}'")]
    InvalidPayment(String),

    /// The status is not one of the known labels.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task status labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("status must be one of Pending, Completed, Scheduled, got '{0}'")]
pub struct ParseTaskStatusError(pub String);
