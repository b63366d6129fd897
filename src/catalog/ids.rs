//! Numeric identifiers for catalog entries.
//!
//! Ids are assigned by insertion order starting at 1. The value 0 is
//! the reserved blank id: lookups for it (or for any unknown id) yield
//! the blank record instead of failing, and effect fields holding 0
//! mean "nothing here".

use serde::{Deserialize, Serialize};

macro_rules! catalog_id {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl $name {
            /// The reserved "nothing here" id.
            pub const BLANK: Self = Self(0);

            /// Create a new id.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw id value.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Whether this is the reserved blank id.
            #[must_use]
            pub const fn is_blank(self) -> bool {
                self.0 == 0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

catalog_id!(
    /// Identifier of a catalog [`Action`](crate::catalog::Action).
    ActionId,
    "Action"
);
catalog_id!(
    /// Identifier of a catalog [`Mutation`](crate::catalog::Mutation).
    MutationId,
    "Mutation"
);
catalog_id!(
    /// Identifier of a catalog [`Status`](crate::catalog::Status).
    StatusId,
    "Status"
);
catalog_id!(
    /// Identifier of a catalog [`Spell`](crate::catalog::Spell).
    SpellId,
    "Spell"
);
