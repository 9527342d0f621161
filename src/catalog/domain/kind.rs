//! Table layout of each catalog entity.

/// Identifies a catalog entity and describes the table that stores it.
///
/// Brands and platforms share a layout: `<entity>_id` identity key,
/// `<entity>` name column, timestamps and a nullable `deleted_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Brands that commission content.
    Brand,
    /// Social-media platforms content is published on.
    Platform,
}

impl CatalogKind {
    /// Returns the table name.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Brand => "brands",
            Self::Platform => "platforms",
        }
    }

    /// Returns the identity column name.
    #[must_use]
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Brand => "brand_id",
            Self::Platform => "platform_id",
        }
    }

    /// Returns the name column.
    #[must_use]
    pub const fn name_column(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Platform => "platform",
        }
    }

    /// Returns the singular entity noun used in messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        self.name_column()
    }
}
