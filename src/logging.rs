//! Tracing subscriber installation.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The fallback filter directive does not parse.
    #[error("invalid log directive: {0}")]
    InvalidDirective(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Builds the filter: `RUST_LOG` when set and valid, `default_directive`
/// otherwise.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidDirective`] when `default_directive` does
/// not parse.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env().or_else(|_| Ok(EnvFilter::try_new(default_directive)?))
}

/// Installs a compact formatter as the global subscriber.
///
/// # Errors
///
/// Returns [`LoggingError`] when the directive is invalid or a subscriber is
/// already installed.
pub fn init(default_directive: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive)?)
        .compact()
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
