//! Database identity keys.
//!
//! Every entity is keyed by a `BIGINT` identity column. Each entity gets its
//! own newtype so a brand key cannot be passed where a platform key is
//! expected.

/// Conversion between an entity key newtype and its raw column value.
pub trait EntityId: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {
    /// Wraps a raw identity value.
    fn from_raw(value: i64) -> Self;

    /// Returns the raw identity value.
    fn into_raw(self) -> i64;
}

/// Declares an identity key newtype.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identity value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identity value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl $crate::ids::EntityId for $name {
            fn from_raw(value: i64) -> Self {
                Self(value)
            }

            fn into_raw(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use entity_id;
