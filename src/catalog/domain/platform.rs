//! Platform entity.

use super::{CatalogEntry, CatalogKind};
use crate::ids::entity_id;
use crate::listing::Collection;
use serde::Serialize;

entity_id! {
    /// Identity key of a platform.
    PlatformId
}

/// A social-media platform content is published on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    platform_id: PlatformId,
    platform: String,
}

impl Collection for Platform {
    const COLLECTION_NAME: &'static str = "platforms";
}

impl CatalogEntry for Platform {
    type Id = PlatformId;

    const KIND: CatalogKind = CatalogKind::Platform;

    fn from_parts(id: PlatformId, name: String) -> Self {
        Self {
            platform_id: id,
            platform: name,
        }
    }

    fn id(&self) -> PlatformId {
        self.platform_id
    }

    fn name(&self) -> &str {
        &self.platform
    }
}
