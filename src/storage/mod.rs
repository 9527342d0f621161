//! Storage plumbing shared by the entity adapters.
//!
//! - [`postgres`]: pool construction, schema application and the
//!   blocking/transaction helpers every `PostgreSQL` repository runs through.
//! - [`memory`]: one in-memory database shared by the in-memory repositories
//!   so cross-entity checks see the same rows.

pub mod memory;
pub mod postgres;
