//! Resolution engine and mutation API for lithology catalogues.
//!
//! A [`CatalogueSession`] owns one loaded [`Catalogue`](lithocat_model::Catalogue)
//! together with the lookup tables derived from it. Every read goes through
//! the session's queries, every change through its mutations, and every
//! structural change rebuilds the tables before the call returns.
//!
//! # Queries
//!
//! Each entity kind has a list query (`find_lithologies`, `find_curves`, ...)
//! returning every match, and an exactly-one query (`lithology`, `curve`,
//! ...) that fails with [`CatalogueError::NotFound`] or
//! [`CatalogueError::Ambiguous`]. Both accept a typed id or a token; a token
//! with the canonical id shape matches ids, anything else matches names.
//!
//! # Mutations
//!
//! Duplicate, create and delete operations mint fresh ids with
//! [`generate_id`] and keep every id space free of duplicates.
//! [`CatalogueSession::update_lithology_parameter`] writes literals in place
//! and rewrites the point table of curve-valued parameters.

mod config;
mod error;
mod index;
mod mutation;
mod query;
mod session;
mod tables;

pub use config::{CatalogueConfig, NameMatching, NameMatchingPolicy};
pub use error::{CatalogueError, CatalogueResult};
pub use mutation::{ParameterUpdate, generate_id, generate_id_with};
pub use query::{
    CurveMatch, EntityRef, LithologyGroupMatch, LithologyMatch, MetaParameterGroupMatch,
    MetaParameterMatch, OwnerRef, ResolvedValue,
};
pub use session::CatalogueSession;
pub use tables::{CurveRow, LithologyRow, MetaParameterGroupRow, MetaParameterRow, ParameterRow};
