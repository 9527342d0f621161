//! `PostgreSQL` adapter for task persistence.

mod models;
mod repository;
mod sql;

pub use repository::PostgresTaskRepository;
