//! Domain model for catalog entries.

mod brand;
mod entry;
mod error;
mod kind;
mod name;
mod platform;

pub use brand::{Brand, BrandId};
pub use entry::CatalogEntry;
pub use error::CatalogDomainError;
pub use kind::CatalogKind;
pub use name::{CatalogName, MAX_NAME_LENGTH};
pub use platform::{Platform, PlatformId};
