//! In-memory adapters for catalog persistence.

mod catalog;

pub use catalog::{InMemoryBrandRepository, InMemoryCatalogRepository, InMemoryPlatformRepository};
