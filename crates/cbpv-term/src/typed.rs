//! Building nodes and reading the types of typed ones.

use crate::{Computation, ComputationKind, Phase, Typed, Value, ValueKind};
use cbpv_ty::{ComputationType, RefinedType};

impl<P: Phase> Value<P> {
  /// Returns a new value.
  #[must_use]
  pub fn new(kind: ValueKind<P>, meta: P::ValueMeta) -> Self {
    Self { kind, meta }
  }
}

impl<P: Phase> Computation<P> {
  /// Returns a new computation.
  #[must_use]
  pub fn new(kind: ComputationKind<P>, meta: P::ComputationMeta) -> Self {
    Self { kind, meta }
  }
}

impl Value<Typed> {
  /// Returns the type of this, as recorded by the statics.
  #[must_use]
  pub fn ty(&self) -> &RefinedType {
    &self.meta
  }
}

impl Computation<Typed> {
  /// Returns the type of this, as recorded by the statics.
  #[must_use]
  pub fn ty(&self) -> &ComputationType {
    &self.meta
  }
}
