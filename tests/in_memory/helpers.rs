//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::MockClock;

use contentboard::catalog::{
    adapters::memory::{InMemoryBrandRepository, InMemoryPlatformRepository},
    domain::{Brand, CatalogEntry, Platform},
    services::{BrandService, PlatformService},
};
use contentboard::storage::memory::InMemoryDatabase;
use contentboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    services::{TaskRequest, TaskService},
};
use rstest::fixture;

/// Services wired to one shared in-memory database.
pub struct Board {
    pub database: InMemoryDatabase,
    pub brands: BrandService<InMemoryBrandRepository>,
    pub platforms: PlatformService<InMemoryPlatformRepository>,
    pub tasks: TaskService<InMemoryTaskRepository>,
}

impl Board {
    /// Wires every service to `database`.
    pub fn new(database: InMemoryDatabase) -> Self {
        Self {
            brands: BrandService::new(Arc::new(InMemoryBrandRepository::new(database.clone()))),
            platforms: PlatformService::new(Arc::new(InMemoryPlatformRepository::new(
                database.clone(),
            ))),
            tasks: TaskService::new(Arc::new(InMemoryTaskRepository::new(database.clone()))),
            database,
        }
    }

    /// Creates a brand, failing the test on error.
    pub async fn brand(&self, name: &str) -> Brand {
        self.brands
            .create(name)
            .await
            .expect("brand creation should succeed")
    }

    /// Creates a platform, failing the test on error.
    pub async fn platform(&self, name: &str) -> Platform {
        self.platforms
            .create(name)
            .await
            .expect("platform creation should succeed")
    }

    /// Creates a pending task due 2025-01-10, failing the test on error.
    pub async fn task(&self, title: &str, brand: &Brand, platform: &Platform) -> TaskId {
        self.tasks
            .create(&task_request(title, brand, platform))
            .await
            .expect("task creation should succeed")
    }
}

/// Builds a pending task request due 2025-01-10 paying 100.
#[must_use]
pub fn task_request(title: &str, brand: &Brand, platform: &Platform) -> TaskRequest {
    TaskRequest::new(
        title,
        brand.id().value(),
        platform.id().value(),
        "2025-01-10",
        "100",
        "Pending",
    )
}

/// Provides services wired to a fresh database for each test.
#[fixture]
pub fn board() -> Board {
    Board::new(InMemoryDatabase::new())
}

/// Interval between two consecutive writes on a [`stepped_board`].
pub const WRITE_STEP: Duration = Duration::minutes(1);

/// Instant of the first write on a [`stepped_board`].
///
/// # Panics
///
/// Panics if the fixed start date is not a valid UTC instant.
#[must_use]
pub fn first_write_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0)
        .single()
        .expect("valid start instant")
}

/// Provides services over a database whose clock moves forward by
/// [`WRITE_STEP`] on every write.
#[fixture]
pub fn stepped_board() -> Board {
    let writes = Arc::new(AtomicI32::new(0));
    let mut clock = MockClock::new();
    clock.expect_utc().returning(move || {
        let index = writes.fetch_add(1, Ordering::SeqCst);
        first_write_at() + WRITE_STEP * index
    });
    Board::new(InMemoryDatabase::with_clock(Arc::new(clock)))
}
