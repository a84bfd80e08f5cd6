//! The type syntax.

use std::collections::BTreeMap;
use str_util::{Name, SmolStr};

/// A map from names to things, ordered by name.
///
/// Used for sum entries, record and variant fields, bundle members, and effects.
pub type Row<T> = BTreeMap<Name, T>;

/// Returns a row with the given entries. Later entries with the same name replace earlier ones.
#[must_use]
pub fn row<I, S, T>(entries: I) -> Row<T>
where
  I: IntoIterator<Item = (S, T)>,
  S: Into<SmolStr>,
{
  entries.into_iter().map(|(name, x)| (Name::new(name), x)).collect()
}

/// A value type.
///
/// Equality and hashing are alpha-aware: `μX. X` equals `μY. Y`.
#[derive(Debug, Clone)]
pub enum ValueType {
  /// A tagged union. Each entry is usually a `Variant` with the same tag.
  Sum(Row<RefinedType>),
  /// A product with named fields.
  Record(Row<RefinedType>),
  /// A single labeled constructor shape, the payload of one `Sum` arm.
  Variant(Name, Row<RefinedType>),
  /// A suspended computation.
  Thunk(Box<ComputationType>),
  /// `μX. body`, where the name is bound in the body.
  Recursive(Name, Box<RefinedType>),
  /// A bound or free type variable.
  Variable(Name),
  /// `∀X. body`, quantification over a value type.
  TyAbsV(Name, Box<RefinedType>),
  /// Application of a quantified type to an argument type.
  TyAppV(Box<RefinedType>, Box<RefinedType>),
}

/// `{ x : A | ψ }`. The predicate is currently always trivially true, so this is just `A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefinedType {
  /// The underlying value type.
  pub handle: ValueType,
}

/// A computation type.
#[derive(Debug, Clone)]
pub enum ComputationType {
  /// Returns a value of this type, with these named effects. The effects are carried but not
  /// checked.
  Produce(RefinedType, Row<ComputationType>),
  /// A bundle of named computations.
  With(Row<ComputationType>),
  /// A function from one value to a computation.
  Arrow(RefinedType, Box<ComputationType>),
  /// An unresolved computation type, to be solved by unification.
  Variable(Name),
}

impl From<ValueType> for RefinedType {
  fn from(handle: ValueType) -> Self {
    Self { handle }
  }
}

impl RefinedType {
  /// Returns a new refined type with the trivial refinement.
  #[must_use]
  pub fn new(handle: ValueType) -> Self {
    Self { handle }
  }

  /// Returns a `Sum`.
  #[must_use]
  pub fn sum<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = (S, RefinedType)>,
    S: Into<SmolStr>,
  {
    ValueType::Sum(row(entries)).into()
  }

  /// Returns a `Record`.
  #[must_use]
  pub fn record<I, S>(fields: I) -> Self
  where
    I: IntoIterator<Item = (S, RefinedType)>,
    S: Into<SmolStr>,
  {
    ValueType::Record(row(fields)).into()
  }

  /// Returns a `Variant`.
  #[must_use]
  pub fn variant<T, I, S>(tag: T, fields: I) -> Self
  where
    T: Into<SmolStr>,
    I: IntoIterator<Item = (S, RefinedType)>,
    S: Into<SmolStr>,
  {
    ValueType::Variant(Name::new(tag), row(fields)).into()
  }

  /// Returns a `Thunk` of the computation type.
  #[must_use]
  pub fn thunk(body: ComputationType) -> Self {
    ValueType::Thunk(Box::new(body)).into()
  }

  /// Returns a `Recursive`.
  #[must_use]
  pub fn recursive<S>(binder: S, body: RefinedType) -> Self
  where
    S: Into<SmolStr>,
  {
    ValueType::Recursive(Name::new(binder), Box::new(body)).into()
  }

  /// Returns a `Variable`.
  #[must_use]
  pub fn var<S>(name: S) -> Self
  where
    S: Into<SmolStr>,
  {
    ValueType::Variable(Name::new(name)).into()
  }

  /// Returns a `TyAbsV`.
  #[must_use]
  pub fn ty_abs<S>(binder: S, body: RefinedType) -> Self
  where
    S: Into<SmolStr>,
  {
    ValueType::TyAbsV(Name::new(binder), Box::new(body)).into()
  }

  /// Returns a `TyAppV`.
  #[must_use]
  pub fn ty_app(func: RefinedType, arg: RefinedType) -> Self {
    ValueType::TyAppV(Box::new(func), Box::new(arg)).into()
  }

  /// Returns the empty sum, which has no values.
  #[must_use]
  pub fn bottom() -> Self {
    ValueType::Sum(Row::new()).into()
  }

  /// Returns whether this is the empty sum.
  #[must_use]
  pub fn is_bottom(&self) -> bool {
    matches!(&self.handle, ValueType::Sum(entries) if entries.is_empty())
  }

  /// Returns the name if this is a `Variable`.
  #[must_use]
  pub fn as_var(&self) -> Option<&Name> {
    match &self.handle {
      ValueType::Variable(name) => Some(name),
      _ => None,
    }
  }

  /// Returns a description of this type.
  #[must_use]
  pub fn desc(&self) -> &'static str {
    match self.handle {
      ValueType::Sum(_) => "a sum type",
      ValueType::Record(_) => "a record type",
      ValueType::Variant(_, _) => "a variant type",
      ValueType::Thunk(_) => "a thunk type",
      ValueType::Recursive(_, _) => "a recursive type",
      ValueType::Variable(_) => "a type variable",
      ValueType::TyAbsV(_, _) => "a quantified type",
      ValueType::TyAppV(_, _) => "a type application",
    }
  }
}

impl ComputationType {
  /// Returns a `Produce` with no effects.
  #[must_use]
  pub fn produce(value: RefinedType) -> Self {
    Self::Produce(value, Row::new())
  }

  /// Returns a `With`.
  #[must_use]
  pub fn with<I, S>(bundle: I) -> Self
  where
    I: IntoIterator<Item = (S, ComputationType)>,
    S: Into<SmolStr>,
  {
    Self::With(row(bundle))
  }

  /// Returns an `Arrow`.
  #[must_use]
  pub fn arrow(param: RefinedType, body: ComputationType) -> Self {
    Self::Arrow(param, Box::new(body))
  }

  /// Returns a `Variable`.
  #[must_use]
  pub fn var<S>(name: S) -> Self
  where
    S: Into<SmolStr>,
  {
    Self::Variable(Name::new(name))
  }

  /// Returns the value type of thunks of this.
  #[must_use]
  pub fn thunk(self) -> RefinedType {
    RefinedType::thunk(self)
  }

  /// Returns the name if this is a `Variable`.
  #[must_use]
  pub fn as_var(&self) -> Option<&Name> {
    match self {
      Self::Variable(name) => Some(name),
      _ => None,
    }
  }

  /// Returns a description of this type.
  #[must_use]
  pub fn desc(&self) -> &'static str {
    match self {
      Self::Produce(_, _) => "a produce type",
      Self::With(_) => "a bundle type",
      Self::Arrow(_, _) => "a function type",
      Self::Variable(_) => "a computation type variable",
    }
  }
}
