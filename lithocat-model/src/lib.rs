//! Catalogue data model.
//!
//! A catalogue owns three independent trees:
//! - [`Meta`]: the recursive schema of parameter groups and parameters
//!   that names every property a lithology may carry
//! - [`CurveGroup`]s: flat groups of named [`Curve`]s (piecewise functions)
//! - [`MainLithologyGroup`]s: the recursive group hierarchy ending in
//!   [`Lithology`] definitions
//!
//! Ownership is strictly tree-shaped. The only cross links are weak,
//! by typed id: mixing components point at lithologies, parameters point
//! at meta parameters and, when their value is id-shaped, at curves. A deep
//! copy is therefore a plain `clone()`.
//!
//! Lookups across the trees live in `lithocat-catalogue`; this crate only
//! knows about shapes.

mod catalogue;
mod curve;
mod lithology;
mod meta;
mod value;

pub use catalogue::{Catalogue, DocumentAttribute};
pub use curve::{Curve, CurveGroup, CurvePoint};
pub use lithology::{
    Lithology, LithologyComponent, LithologyGroup, MainLithologyGroup, Mixing, Parameter,
    ParameterGroup,
};
pub use meta::{Meta, MetaParameter, MetaParameterGroup};
pub use value::{Literal, ParameterValue};
