//! `PostgreSQL` adapters for catalog persistence.

mod models;
mod repository;
mod sql;

pub use repository::{PostgresBrandRepository, PostgresCatalogRepository, PostgresPlatformRepository};
