//! The term syntax: values and computations.
//!
//! There is one tree shape, generic over a [`Phase`]. [`Untyped`] trees come from the parser and
//! carry nothing extra at each node. [`Typed`] trees come out of the statics and carry the type of
//! every node.

#![allow(clippy::module_name_repetitions)]

mod display;
mod subst;
mod sugar;
mod typed;

pub mod dsl;

use cbpv_ty::{ComputationType, RefinedType, Row};
use std::fmt;
use str_util::Name;

/// What a tree carries at each node.
pub trait Phase: fmt::Debug + Clone + PartialEq {
  /// Carried at each value node.
  type ValueMeta: fmt::Debug + Clone + PartialEq;
  /// Carried at each computation node.
  type ComputationMeta: fmt::Debug + Clone + PartialEq;

  /// Writes the value meta after a displayed value node. Writes nothing by default.
  ///
  /// # Errors
  ///
  /// When writing fails.
  fn fmt_value_meta(_: &Self::ValueMeta, _: &mut fmt::Formatter<'_>) -> fmt::Result {
    Ok(())
  }
}

/// Trees fresh from the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Untyped {}

impl Phase for Untyped {
  type ValueMeta = ();
  type ComputationMeta = ();
}

/// Trees out of the statics, with a type at every node.
#[derive(Debug, Clone, PartialEq)]
pub enum Typed {}

impl Phase for Typed {
  type ValueMeta = RefinedType;
  type ComputationMeta = ComputationType;

  fn fmt_value_meta(ty: &RefinedType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, ": {ty}")
  }
}

/// A value.
#[derive(Debug, Clone, PartialEq)]
pub struct Value<P: Phase> {
  /// The node.
  pub kind: ValueKind<P>,
  /// What the phase carries here.
  pub meta: P::ValueMeta,
}

/// A kind of value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind<P: Phase> {
  /// `(v) ⇐ T`.
  Annotate(Box<Value<P>>, RefinedType),
  /// Introduces a recursive type.
  Roll(Box<Value<P>>),
  /// Eliminates a recursive type.
  Unroll(Box<Value<P>>),
  /// Puts a value into one arm of a sum.
  Injection(Name, Box<Value<P>>),
  /// A term variable.
  Variable(Name),
  /// Suspends a computation.
  Thunk(Box<Computation<P>>),
  /// Abstracts over a value type.
  TyAbsV(Name, Box<Value<P>>),
  /// A record of values.
  Record(Row<Value<P>>),
  /// A tagged record of values.
  Variant(Name, Row<Value<P>>),
}

/// A computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation<P: Phase> {
  /// The node.
  pub kind: ComputationKind<P>,
  /// What the phase carries here.
  pub meta: P::ComputationMeta,
}

/// A kind of computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationKind<P: Phase> {
  /// `(c) ⇐ T`.
  Annotate(Box<Computation<P>>, ComputationType),
  /// Returns the value.
  Produce(Box<Value<P>>),
  /// Runs a thunk.
  Force(Box<Value<P>>),
  /// Applies a function to an argument.
  Apply(Box<Computation<P>>, Box<Value<P>>),
  /// Projects one member out of a bundle.
  Resolve(Box<Computation<P>>, Name),
  /// A function of one value.
  Lambda(Name, Box<Computation<P>>),
  /// A bundle of named computations.
  With(Row<Computation<P>>),
  /// `let name = left in right`: runs `left`, binds what it produces, runs `right`.
  Sequence(Box<Computation<P>>, Name, Box<Computation<P>>),
  /// `def name: ty = bound in body`: a recursive local definition.
  Def(Name, Box<Computation<P>>, ComputationType, Box<Computation<P>>),
  /// Instantiates a value quantified over a value type.
  TyAppV(Box<Value<P>>, RefinedType),
  /// Instantiates with a computation type. Reserved: nothing infers this yet.
  TyAppC(Box<Value<P>>, ComputationType),
  /// Gets one field of a record or variant.
  Projection(Box<Value<P>>, Name),
  /// Cases on a value of sum type, with one branch per tag.
  Match(Box<Value<P>>, Row<Branch<P>>),
}

/// One branch of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch<P: Phase> {
  /// Bound to the payload of the arm in the body.
  pub binder: Name,
  /// Runs when the scrutinee has this branch's tag.
  pub body: Computation<P>,
}

/// An untyped value.
pub type UntypedValue = Value<Untyped>;
/// An untyped computation.
pub type UntypedComputation = Computation<Untyped>;
/// A typed value.
pub type TypedValue = Value<Typed>;
/// A typed computation.
pub type TypedComputation = Computation<Typed>;
