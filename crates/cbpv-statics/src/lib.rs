//! Static analysis: bidirectional type checking of values and computations.
//!
//! Values and computations are checked against a type where one is known, and inferred otherwise.
//! Only the forms that are not redexes infer. Every node of a well-typed tree comes back with its
//! type. Type variables left by the parser are solved by unification along the way.

#![allow(clippy::module_name_repetitions)]

mod computation;
mod error;
mod scope;
mod st;
mod value;

pub use error::Error;
pub use scope::Typer;
pub use st::St;

use cbpv_term::{TypedComputation, UntypedComputation};
use cbpv_ty::ComputationType;

/// Infers the type of a whole program, in an empty scope.
///
/// # Errors
///
/// On the first type error. There is no partial result.
pub fn get(st: &mut St, comp: &UntypedComputation) -> Result<TypedComputation, Error> {
  elapsed::log("cbpv_statics::get", || Typer::root().infer_c(st, comp))
}

/// Checks a whole program against a type, in an empty scope.
///
/// # Errors
///
/// On the first type error. There is no partial result.
pub fn get_checked(
  st: &mut St,
  comp: &UntypedComputation,
  ty: &ComputationType,
) -> Result<TypedComputation, Error> {
  elapsed::log("cbpv_statics::get_checked", || Typer::root().check_c(st, comp, ty))
}
