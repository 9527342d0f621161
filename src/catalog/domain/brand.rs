//! Brand entity.

use super::{CatalogEntry, CatalogKind};
use crate::ids::entity_id;
use crate::listing::Collection;
use serde::Serialize;

entity_id! {
    /// Identity key of a brand.
    BrandId
}

/// A brand that commissions content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    brand_id: BrandId,
    brand: String,
}

impl Collection for Brand {
    const COLLECTION_NAME: &'static str = "brands";
}

impl CatalogEntry for Brand {
    type Id = BrandId;

    const KIND: CatalogKind = CatalogKind::Brand;

    fn from_parts(id: BrandId, name: String) -> Self {
        Self {
            brand_id: id,
            brand: name,
        }
    }

    fn id(&self) -> BrandId {
        self.brand_id
    }

    fn name(&self) -> &str {
        &self.brand
    }
}
