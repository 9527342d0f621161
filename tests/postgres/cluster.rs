//! Cluster lifecycle helpers for `PostgreSQL` integration tests.

use postgresql_embedded::PostgreSQL;
use rstest::fixture;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<ManagedCluster> = OnceLock::new();

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded `PostgreSQL` server started once per test binary.
pub struct ManagedCluster {
    runtime: Runtime,
    postgres: PostgreSQL,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::default();
        runtime.block_on(async {
            postgres.setup().await?;
            postgres.start().await
        })?;
        Ok(Self { runtime, postgres })
    }

    /// Creates an empty database.
    ///
    /// # Errors
    ///
    /// Returns an error when the server rejects the statement.
    pub fn create_database(&self, name: &str) -> Result<(), BoxError> {
        self.runtime.block_on(self.postgres.create_database(name))?;
        Ok(())
    }

    /// Returns the connection URL of `database`.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.postgres.settings().url(database)
    }
}

/// Provides the shared `PostgreSQL` test cluster.
#[fixture]
pub fn postgres_cluster() -> PostgresCluster {
    SHARED_CLUSTER.get_or_init(|| match ManagedCluster::new() {
        Ok(cluster) => cluster,
        Err(err) => panic!("SKIP-TEST-CLUSTER: failed to start PostgreSQL: {err}"),
    })
}
