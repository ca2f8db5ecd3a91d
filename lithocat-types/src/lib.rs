//! Identifier types for lithology catalogues.
//!
//! This crate defines the small vocabulary shared by every layer of the
//! catalogue engine:
//! - One identifier newtype per entity kind (lithologies, groups, curves,
//!   meta parameters), so a curve id can never be passed where a lithology
//!   id is expected
//! - The canonical id shape (hyphenated lowercase hex) and the
//!   [`IdentifierToken`] split between ids and human names
//! - [`Lookup`], the "typed handle or free-form token" argument accepted by
//!   queries and mutations

mod ids;
mod kind;
mod token;

pub use ids::{
    CatalogueId, CurveGroupId, CurveId, LithologyGroupId, LithologyId, MainLithologyGroupId,
    MetaParameterGroupId, MetaParameterId, is_canonical_id,
};
pub use kind::EntityKind;
pub use token::{IdentifierToken, Lookup};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier {0:?}: expected 8-4-4-4-12 lowercase hex")]
    InvalidId(String),
}
