//! Contentboard: brands, platforms and content tasks over `PostgreSQL`.
//!
//! The crate is the data-access and validation core of a social-media
//! content planner. It keeps three soft-deletable entities: brands,
//! platforms and tasks, where each task references one brand and one
//! platform.
//!
//! # Architecture
//!
//! Every entity module follows hexagonal architecture principles:
//!
//! - **Domain**: validated values and read models
//! - **Ports**: repository traits
//! - **Adapters**: `PostgreSQL` (Diesel) and in-memory implementations
//! - **Services**: request validation and list orchestration
//!
//! # Modules
//!
//! - [`catalog`]: brands and platforms
//! - [`task`]: content tasks
//! - [`listing`]: keyword search and pagination shared by list operations
//! - [`error`]: error kinds surfaced to a transport layer
//! - [`api`]: transport-agnostic response shapes
//! - [`storage`]: connection pooling, transactions and the in-memory store
//! - [`config`] and [`logging`]: process setup

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod listing;
pub mod logging;
pub mod storage;
pub mod task;
