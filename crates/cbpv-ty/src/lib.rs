//! Types and fundamental operations on them for the statics.
//!
//! There are two sorts of types: value types, which classify data, and computation types, which
//! classify things that run. A [`RefinedType`] wraps every value type so that refinements can
//! be attached later without changing call sites.

#![allow(clippy::module_name_repetitions)]

mod alpha;
mod display;

pub mod name;
pub mod subst;
pub mod ty;
pub mod unify;

pub use name::NameSupply;
pub use ty::{ComputationType, RefinedType, Row, ValueType, row};
pub use unify::ProofObligations;
