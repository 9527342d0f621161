//! Content tasks: a deliverable for one brand on one platform.
//!
//! A task references a brand and a platform by key. Both references are
//! checked at write time, inside the same transaction as the write, and only
//! visible (not soft-deleted) rows qualify. Reads join the referenced names
//! into [`domain::TaskDetails`].
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
