//! Trait tying a catalog entity to its key type and table layout.

use super::CatalogKind;
use crate::ids::EntityId;
use crate::listing::Collection;
use std::fmt;

/// A named, soft-deletable entity stored in a catalog table.
pub trait CatalogEntry: Collection + Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Identity key type.
    type Id: EntityId;

    /// Table layout for this entity.
    const KIND: CatalogKind;

    /// Builds an entry from stored values.
    fn from_parts(id: Self::Id, name: String) -> Self;

    /// Returns the identity key.
    fn id(&self) -> Self::Id;

    /// Returns the name.
    fn name(&self) -> &str;
}
