//! Identifier newtypes for catalogue entities.
//!
//! Ids read from a document are kept verbatim. Ids minted by the catalogue
//! are random UUIDs rendered in the canonical hyphenated lowercase form,
//! which is also the shape used to tell an id apart from a name.

use crate::{EntityKind, Error, Lookup};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const CANONICAL_LEN: usize = 36;

/// Returns true if `s` has the canonical id shape:
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` with lowercase hex digits.
#[must_use]
pub fn is_canonical_id(s: &str) -> bool {
    // 36 characters is only reachable through the hyphenated form; uuid
    // accepts uppercase digits, the catalogue format does not.
    s.len() == CANONICAL_LEN
        && !s.bytes().any(|b| b.is_ascii_uppercase())
        && Uuid::try_parse(s).is_ok()
}

/// Behaviour shared by every identifier newtype.
pub trait CatalogueId: Clone + Ord + AsRef<str> + Borrow<str> + fmt::Display {
    /// The entity kind this id identifies.
    const KIND: EntityKind;

    /// Mints a fresh random id in canonical form.
    fn generate() -> Self;
}

macro_rules! catalogue_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an id exactly as it appears in a document.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mints a fresh random id in canonical form.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().hyphenated().to_string())
            }

            /// Parses a canonical id, rejecting anything that is not id-shaped.
            pub fn parse(s: &str) -> Result<Self, Error> {
                if is_canonical_id(s) {
                    Ok(Self(s.to_owned()))
                } else {
                    Err(Error::InvalidId(s.to_owned()))
                }
            }

            /// Returns the id text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the id has the canonical shape.
            #[must_use]
            pub fn is_canonical(&self) -> bool {
                is_canonical_id(&self.0)
            }

            /// Consumes the id, returning its text.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl CatalogueId for $name {
            const KIND: EntityKind = $kind;

            fn generate() -> Self {
                $name::generate()
            }
        }

        impl<'a> From<$name> for Lookup<'a, $name> {
            fn from(id: $name) -> Self {
                Lookup::Id(id)
            }
        }

        impl<'a> From<&'a $name> for Lookup<'a, $name> {
            fn from(id: &'a $name) -> Self {
                Lookup::Id(id.clone())
            }
        }
    };
}

catalogue_id!(
    /// Identifier of a root-level lithology grouping.
    MainLithologyGroupId,
    EntityKind::MainLithologyGroup
);
catalogue_id!(
    /// Identifier of a (possibly nested) lithology group.
    LithologyGroupId,
    EntityKind::LithologyGroup
);
catalogue_id!(
    /// Identifier of a lithology. Also the target of mixing components.
    LithologyId,
    EntityKind::Lithology
);
catalogue_id!(
    /// Identifier of a curve group.
    CurveGroupId,
    EntityKind::CurveGroup
);
catalogue_id!(
    /// Identifier of a curve. Curve-valued parameters hold one of these.
    CurveId,
    EntityKind::Curve
);
catalogue_id!(
    /// Identifier of a meta parameter group in the schema tree.
    MetaParameterGroupId,
    EntityKind::MetaParameterGroup
);
catalogue_id!(
    /// Identifier of a meta parameter in the schema tree.
    MetaParameterId,
    EntityKind::MetaParameter
);
