//! One-node wrappers for building untyped trees.

use crate::{Branch, Computation, ComputationKind, Untyped, Value, ValueKind};
use cbpv_ty::{ComputationType, RefinedType, row};
use str_util::{Name, SmolStr};

impl From<ValueKind<Untyped>> for Value<Untyped> {
  fn from(kind: ValueKind<Untyped>) -> Self {
    Self { kind, meta: () }
  }
}

impl From<ComputationKind<Untyped>> for Computation<Untyped> {
  fn from(kind: ComputationKind<Untyped>) -> Self {
    Self { kind, meta: () }
  }
}

impl Value<Untyped> {
  /// Returns a variable.
  #[must_use]
  pub fn var<S>(name: S) -> Self
  where
    S: Into<SmolStr>,
  {
    ValueKind::Variable(Name::new(name)).into()
  }

  /// Returns a record.
  #[must_use]
  pub fn record<I, S>(fields: I) -> Self
  where
    I: IntoIterator<Item = (S, Value<Untyped>)>,
    S: Into<SmolStr>,
  {
    ValueKind::Record(row(fields)).into()
  }

  /// Returns a variant.
  #[must_use]
  pub fn variant<T, I, S>(tag: T, fields: I) -> Self
  where
    T: Into<SmolStr>,
    I: IntoIterator<Item = (S, Value<Untyped>)>,
    S: Into<SmolStr>,
  {
    ValueKind::Variant(Name::new(tag), row(fields)).into()
  }

  /// Returns a type abstraction binding `name` in `body`.
  #[must_use]
  pub fn ty_abs<S>(name: S, body: Value<Untyped>) -> Self
  where
    S: Into<SmolStr>,
  {
    ValueKind::TyAbsV(Name::new(name), Box::new(body)).into()
  }

  /// Returns `(self) ⇐ ty`.
  #[must_use]
  pub fn annotate(self, ty: RefinedType) -> Self {
    ValueKind::Annotate(Box::new(self), ty).into()
  }

  /// Returns `roll(self)`.
  #[must_use]
  pub fn roll(self) -> Self {
    ValueKind::Roll(Box::new(self)).into()
  }

  /// Returns `unroll(self)`.
  #[must_use]
  pub fn unroll(self) -> Self {
    ValueKind::Unroll(Box::new(self)).into()
  }

  /// Returns this injected into the arm `tag` of a sum.
  #[must_use]
  pub fn inject<S>(self, tag: S) -> Self
  where
    S: Into<SmolStr>,
  {
    ValueKind::Injection(Name::new(tag), Box::new(self)).into()
  }

  /// Returns the computation that produces this.
  #[must_use]
  pub fn ret(self) -> Computation<Untyped> {
    ComputationKind::Produce(Box::new(self)).into()
  }

  /// Returns the computation that forces this.
  #[must_use]
  pub fn force(self) -> Computation<Untyped> {
    ComputationKind::Force(Box::new(self)).into()
  }

  /// Returns the computation that gets the field `key` of this.
  #[must_use]
  pub fn select<S>(self, key: S) -> Computation<Untyped>
  where
    S: Into<SmolStr>,
  {
    ComputationKind::Projection(Box::new(self), Name::new(key)).into()
  }

  /// Returns the computation that instantiates this at `ty`.
  #[must_use]
  pub fn ty_app(self, ty: RefinedType) -> Computation<Untyped> {
    ComputationKind::TyAppV(Box::new(self), ty).into()
  }

  /// Returns a match on this. Each branch is `(tag, binder, body)`.
  #[must_use]
  pub fn match_on<I, T, B>(self, branches: I) -> Computation<Untyped>
  where
    I: IntoIterator<Item = (T, B, Computation<Untyped>)>,
    T: Into<SmolStr>,
    B: Into<SmolStr>,
  {
    let branches = branches
      .into_iter()
      .map(|(tag, binder, body)| (tag, Branch { binder: Name::new(binder), body }));
    ComputationKind::Match(Box::new(self), row(branches)).into()
  }
}

impl Computation<Untyped> {
  /// Returns a bundle.
  #[must_use]
  pub fn with<I, S>(bundle: I) -> Self
  where
    I: IntoIterator<Item = (S, Computation<Untyped>)>,
    S: Into<SmolStr>,
  {
    ComputationKind::With(row(bundle)).into()
  }

  /// Returns a function binding `param` in `body`.
  #[must_use]
  pub fn lambda<S>(param: S, body: Computation<Untyped>) -> Self
  where
    S: Into<SmolStr>,
  {
    ComputationKind::Lambda(Name::new(param), Box::new(body)).into()
  }

  /// Returns `let name = self in body`.
  #[must_use]
  pub fn sequence<S>(self, name: S, body: Computation<Untyped>) -> Self
  where
    S: Into<SmolStr>,
  {
    ComputationKind::Sequence(Box::new(self), Name::new(name), Box::new(body)).into()
  }

  /// Returns `def name: ty = bound in body`.
  #[must_use]
  pub fn def<S>(name: S, bound: Computation<Untyped>, ty: ComputationType, body: Self) -> Self
  where
    S: Into<SmolStr>,
  {
    ComputationKind::Def(Name::new(name), Box::new(bound), ty, Box::new(body)).into()
  }

  /// Returns `(self) ⇐ ty`.
  #[must_use]
  pub fn annotate(self, ty: ComputationType) -> Self {
    ComputationKind::Annotate(Box::new(self), ty).into()
  }

  /// Returns this applied to `arg`.
  #[must_use]
  pub fn apply(self, arg: Value<Untyped>) -> Self {
    ComputationKind::Apply(Box::new(self), Box::new(arg)).into()
  }

  /// Returns the member `tag` of this bundle.
  #[must_use]
  pub fn resolve<S>(self, tag: S) -> Self
  where
    S: Into<SmolStr>,
  {
    ComputationKind::Resolve(Box::new(self), Name::new(tag)).into()
  }

  /// Returns the thunk of this.
  #[must_use]
  pub fn thunk(self) -> Value<Untyped> {
    ValueKind::Thunk(Box::new(self)).into()
  }
}
