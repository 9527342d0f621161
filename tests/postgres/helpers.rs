//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use contentboard::catalog::{
    adapters::postgres::{PostgresBrandRepository, PostgresPlatformRepository},
    domain::{Brand, CatalogName, Platform},
    ports::CatalogRepository,
};
use contentboard::storage::postgres::{PgPool, apply_schema};
use contentboard::task::adapters::postgres::PostgresTaskRepository;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Builds a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Runtime and repositories for one test.
pub struct TestContext {
    pub rt: Runtime,
    pub repos: Repositories,
}

/// Provides a runtime and repositories on a fresh database.
#[fixture]
pub fn context(postgres_cluster: PostgresCluster) -> TestContext {
    let rt = runtime().expect("tokio runtime");
    let repos = setup_repositories(postgres_cluster).expect("repository setup");
    TestContext { rt, repos }
}

/// Repositories sharing a pool on a freshly migrated database.
pub struct Repositories {
    pub pool: PgPool,
    pub brands: PostgresBrandRepository,
    pub platforms: PostgresPlatformRepository,
    pub tasks: PostgresTaskRepository,
}

/// Creates a uniquely named database, applies the schema and wires the
/// repositories to it.
///
/// # Errors
///
/// Returns an error if database creation, pooling or migration fails.
pub fn setup_repositories(cluster: PostgresCluster) -> Result<Repositories, BoxError> {
    let name = format!("contentboard_{}", Uuid::new_v4().simple());
    cluster.create_database(&name)?;
    let manager = ConnectionManager::<PgConnection>::new(cluster.database_url(&name));
    let pool = Pool::builder().max_size(4).build(manager)?;
    let mut connection = pool.get()?;
    apply_schema(&mut connection)?;
    Ok(Repositories {
        brands: PostgresBrandRepository::new(pool.clone()),
        platforms: PostgresPlatformRepository::new(pool.clone()),
        tasks: PostgresTaskRepository::new(pool.clone()),
        pool,
    })
}

/// Creates a brand named `name`.
///
/// # Errors
///
/// Returns an error if the name is invalid or the insert fails.
pub async fn create_brand(repos: &Repositories, name: &str) -> Result<Brand, BoxError> {
    Ok(repos.brands.create(&CatalogName::new(name)?).await?)
}

/// Creates a platform named `name`.
///
/// # Errors
///
/// Returns an error if the name is invalid or the insert fails.
pub async fn create_platform(repos: &Repositories, name: &str) -> Result<Platform, BoxError> {
    Ok(repos.platforms.create(&CatalogName::new(name)?).await?)
}
