//! Port contracts for catalog persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by catalog services.

pub mod repository;

pub use repository::CatalogRepository;
