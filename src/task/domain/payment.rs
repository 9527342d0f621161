//! Payment amount kept as decimal text.

use super::TaskDomainError;
use serde::Serialize;
use std::fmt;

/// Decimal payment amount, e.g. `100` or `149.99`.
///
/// The value is stored in a `NUMERIC` column and carried as text so no
/// precision is lost to floating point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Payment(String);

impl Payment {
    /// Creates a validated payment.
    ///
    /// Accepts an optional leading `-`, one or more digits, and an optional
    /// fraction of one or more digits. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPayment`] for anything else.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if is_decimal(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(TaskDomainError::InvalidPayment(raw))
        }
    }

    /// Returns the amount as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_decimal(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(integral, decimals)| (integral, Some(decimals)));
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
