//! Error types for catalog input validation.

use thiserror::Error;

/// Errors returned while constructing catalog domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The name is empty after trimming.
    #[error("name is required")]
    EmptyName,

    /// The name is longer than the column allows.
    #[error("name must be at most {max} characters, got {length}")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected value.
        length: usize,
    },
}
