//! Blocking execution and transaction helpers.
//!
//! Diesel is synchronous, so every repository call runs on the blocking
//! thread pool. If the awaiting future is dropped, the in-flight closure sees
//! a cancelled [`Cancellation`] at its next checkpoint and the transaction is
//! rolled back.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use diesel::pg::PgConnection;
use diesel::prelude::*;

use super::{PgPool, TransactionSettings};
use crate::error::{RepositoryError, RepositoryResult};

/// Cancellation flag shared between an awaiting caller and its blocking work.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    /// Returns `true` once the caller has gone away.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Fails with [`RepositoryError::Cancelled`] once the caller has gone away.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Cancelled`] when cancellation was requested.
    pub fn checkpoint(&self) -> RepositoryResult<()> {
        if self.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }
        Ok(())
    }

    fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

/// Cancels on drop unless disarmed after the work completed.
struct CancelOnDrop {
    cancellation: Cancellation,
    armed: bool,
}

impl CancelOnDrop {
    const fn new(cancellation: Cancellation) -> Self {
        Self {
            cancellation,
            armed: true,
        }
    }

    const fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if self.armed {
            self.cancellation.cancel();
        }
    }
}

/// Runs `f` with a pooled connection on the blocking thread pool.
pub(crate) async fn run_blocking<F, T>(pool: &PgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection, &Cancellation) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let shared_pool = pool.clone();
    let cancellation = Cancellation::default();
    let mut guard = CancelOnDrop::new(cancellation.clone());

    let result = tokio::task::spawn_blocking(move || {
        let mut connection = shared_pool.get().map_err(RepositoryError::persistence)?;
        f(&mut *connection, &cancellation)
    })
    .await
    .map_err(RepositoryError::persistence)?;

    guard.disarm();
    result
}

/// Runs `f` inside one transaction: committed when `f` returns `Ok`, rolled
/// back on any error.
pub(crate) fn in_transaction<T, F>(
    connection: &mut PgConnection,
    settings: TransactionSettings,
    cancellation: &Cancellation,
    f: F,
) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T>,
{
    cancellation.checkpoint()?;
    connection.transaction::<_, RepositoryError, _>(|tx| {
        settings.apply(tx)?;
        f(tx)
    })
}
