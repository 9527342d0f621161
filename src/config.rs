//! Environment-driven database configuration.
//!
//! Values come from `DB_*` environment variables, optionally seeded from a
//! `.env` file in the working directory.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::storage::postgres::TransactionSettings;

/// Port used when `DB_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5432;

/// Pool size used when `DB_POOL_MAX_SIZE` is unset.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable holds a value of the wrong shape.
    #[error("{key} has invalid value '{value}'")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// `PostgreSQL` connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
    pool_max_size: u32,
    statement_timeout: Option<Duration>,
}

impl DatabaseConfig {
    /// Reads the configuration from the process environment, loading `.env`
    /// first when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv::dotenv() {
            debug!(%err, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = get("DB_PORT")
            .map(|value| parse("DB_PORT", &value))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);
        let pool_max_size = get("DB_POOL_MAX_SIZE")
            .map(|value| parse("DB_POOL_MAX_SIZE", &value))
            .transpose()?
            .unwrap_or(DEFAULT_POOL_MAX_SIZE);
        let statement_timeout = get("DB_STATEMENT_TIMEOUT_MS")
            .map(|value| parse("DB_STATEMENT_TIMEOUT_MS", &value))
            .transpose()?
            .map(Duration::from_millis);

        Ok(Self {
            host: required("DB_HOST")?,
            port,
            username: required("DB_USERNAME")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: required("DB_NAME")?,
            pool_max_size,
            statement_timeout,
        })
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.username, self.password, self.host, self.port, self.database
        )
    }

    /// Returns the server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the database name.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }

    /// Returns the settings applied to every repository transaction.
    #[must_use]
    pub const fn transaction_settings(&self) -> TransactionSettings {
        TransactionSettings::new().with_optional_statement_timeout(self.statement_timeout)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_owned(),
    })
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("pool_max_size", &self.pool_max_size)
            .field("statement_timeout", &self.statement_timeout)
            .finish()
    }
}
