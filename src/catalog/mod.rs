//! Brands and platforms: named, soft-deletable, keyword-searchable labels.
//!
//! Both entities share one shape (an identity key and a name) and one set of
//! operations, so they are implemented once over the [`domain::CatalogEntry`]
//! trait and instantiated as [`domain::Brand`] and [`domain::Platform`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
