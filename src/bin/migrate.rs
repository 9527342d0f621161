//! Applies the database schema.
//!
//! Usage:
//!
//! ```text
//! migrate
//! ```
//!
//! Connection settings come from `DB_HOST`, `DB_PORT`, `DB_USERNAME`,
//! `DB_PASSWORD` and `DB_NAME`, optionally loaded from `.env`. Log verbosity
//! follows `RUST_LOG` and defaults to `info`.

use contentboard::config::{ConfigError, DatabaseConfig};
use contentboard::logging::{self, LoggingError};
use contentboard::storage::postgres::{apply_schema, connect};
use thiserror::Error;
use tracing::error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum MigrateError {
    #[error("logging init failed: {0}")]
    Logging(#[from] LoggingError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("connection failed: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("schema application failed: {0}")]
    Schema(#[from] diesel::result::Error),
}

fn main() -> Result<(), BoxError> {
    run().map_err(|err| {
        error!(error = %err, "migration aborted");
        err.into()
    })
}

fn run() -> Result<(), MigrateError> {
    logging::init("info")?;
    let config = DatabaseConfig::from_env()?;
    let pool = connect(&config)?;
    let mut connection = pool.get()?;
    apply_schema(&mut connection)?;
    Ok(())
}
