//! Error kinds shared by every repository and service.
//!
//! Repositories surface [`RepositoryError`]; services wrap it transparently
//! alongside their own validation errors. Whatever the concrete type, every
//! error classifies into exactly one [`ErrorKind`], which is all the boundary
//! layer needs to pick a response.

use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Coarse classification of a failure, used by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A read found no visible row.
    NotFound,
    /// A business rule failed during a write, or the input was malformed.
    InvariantViolation,
    /// Anything else: connectivity, driver or query failures.
    Internal,
}

/// Errors that can be classified into an [`ErrorKind`].
pub trait Classified {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;
}

/// Business rules that a write can violate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A referenced parent row is missing or soft-deleted.
    #[error("{field} does not exist")]
    MissingReference {
        /// Name of the referencing field, e.g. `brand_id`.
        field: &'static str,
    },

    /// The row targeted by an update or delete is missing or soft-deleted.
    #[error("{entity} {id} does not exist or has been deleted")]
    TargetNotVisible {
        /// Singular entity noun, e.g. `brand`.
        entity: &'static str,
        /// Identifier that was probed.
        id: i64,
    },
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No visible row matched a read.
    #[error("{0}")]
    NotFound(String),

    /// A write was rejected by a business rule.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),

    /// The caller went away before the operation completed.
    #[error("operation cancelled before completion")]
    Cancelled,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a not-found error for a plural entity noun, e.g. `brands not found`.
    #[must_use]
    pub fn not_found(collection: &str) -> Self {
        Self::NotFound(format!("{collection} not found"))
    }

    /// Builds a missing-reference invariant error for `field`.
    #[must_use]
    pub const fn missing_reference(field: &'static str) -> Self {
        Self::Invariant(InvariantViolation::MissingReference { field })
    }

    /// Builds a target-not-visible invariant error.
    #[must_use]
    pub const fn target_not_visible(entity: &'static str, id: i64) -> Self {
        Self::Invariant(InvariantViolation::TargetNotVisible { entity, id })
    }
}

impl Classified for RepositoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Invariant(_) => ErrorKind::InvariantViolation,
            Self::Cancelled | Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
