//! Validated catalog entry name.

use super::CatalogDomainError;
use std::fmt;

/// Maximum length for a name, matching the `VARCHAR(200)` column.
pub const MAX_NAME_LENGTH: usize = 200;

/// Trimmed, non-empty name of a brand or platform.
///
/// Names are not unique: two brands may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogName(String);

impl CatalogName {
    /// Creates a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyName`] when the value is empty after
    /// trimming or [`CatalogDomainError::NameTooLong`] when it exceeds
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CatalogDomainError::EmptyName);
        }

        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(CatalogDomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
                length,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CatalogName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
