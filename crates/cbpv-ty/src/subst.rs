//! Substitution of type variables, unrolling, and free variable queries.
//!
//! Substitution is not capture-avoiding by renaming. Binders are expected to have globally fresh
//! names (see [`crate::name::NameSupply`]), so the only care taken is to not descend under a binder
//! that shadows the name being substituted.

use crate::ty::{ComputationType, RefinedType, Row, ValueType};
use str_util::Name;

impl RefinedType {
  /// Returns this with free occurrences of the value type variable `name` replaced by
  /// `replacement`.
  #[must_use]
  pub fn substitute_v(&self, name: &Name, replacement: &RefinedType) -> RefinedType {
    let handle = match &self.handle {
      ValueType::Sum(entries) => ValueType::Sum(subst_row_v(entries, name, replacement)),
      ValueType::Record(fields) => ValueType::Record(subst_row_v(fields, name, replacement)),
      ValueType::Variant(tag, fields) => {
        ValueType::Variant(tag.clone(), subst_row_v(fields, name, replacement))
      }
      ValueType::Thunk(body) => ValueType::Thunk(Box::new(body.substitute_v(name, replacement))),
      ValueType::Recursive(binder, body) => {
        if binder == name {
          return self.clone();
        }
        ValueType::Recursive(binder.clone(), Box::new(body.substitute_v(name, replacement)))
      }
      ValueType::Variable(other) => {
        if other == name {
          return replacement.clone();
        }
        ValueType::Variable(other.clone())
      }
      ValueType::TyAbsV(binder, body) => {
        if binder == name {
          return self.clone();
        }
        ValueType::TyAbsV(binder.clone(), Box::new(body.substitute_v(name, replacement)))
      }
      ValueType::TyAppV(func, arg) => ValueType::TyAppV(
        Box::new(func.substitute_v(name, replacement)),
        Box::new(arg.substitute_v(name, replacement)),
      ),
    };
    RefinedType::new(handle)
  }

  /// Unfolds a `Recursive` one step: `μX. T` becomes `T[X := μX. T]`. Anything else is returned
  /// as is.
  #[must_use]
  pub fn unroll(&self) -> RefinedType {
    match &self.handle {
      ValueType::Recursive(binder, body) => body.substitute_v(binder, self),
      _ => self.clone(),
    }
  }

  /// Returns the computation type that produces this with no effects.
  #[must_use]
  pub fn comput(self) -> ComputationType {
    ComputationType::produce(self)
  }

  /// Returns whether the value type variable `name` occurs free in this.
  #[must_use]
  pub fn has_free_v(&self, name: &Name) -> bool {
    match &self.handle {
      ValueType::Sum(row) | ValueType::Record(row) | ValueType::Variant(_, row) => {
        row.values().any(|ty| ty.has_free_v(name))
      }
      ValueType::Thunk(body) => body.has_free_v(name),
      ValueType::Recursive(binder, body) | ValueType::TyAbsV(binder, body) => {
        binder != name && body.has_free_v(name)
      }
      ValueType::Variable(other) => other == name,
      ValueType::TyAppV(func, arg) => func.has_free_v(name) || arg.has_free_v(name),
    }
  }

  /// Returns whether the computation type variable `name` occurs in this.
  #[must_use]
  pub fn has_free_c(&self, name: &Name) -> bool {
    match &self.handle {
      ValueType::Sum(row) | ValueType::Record(row) | ValueType::Variant(_, row) => {
        row.values().any(|ty| ty.has_free_c(name))
      }
      ValueType::Thunk(body) => body.has_free_c(name),
      ValueType::Recursive(_, body) | ValueType::TyAbsV(_, body) => body.has_free_c(name),
      ValueType::Variable(_) => false,
      ValueType::TyAppV(func, arg) => func.has_free_c(name) || arg.has_free_c(name),
    }
  }
}

impl ComputationType {
  /// Returns this with free occurrences of the value type variable `name` replaced by
  /// `replacement`.
  #[must_use]
  pub fn substitute_v(&self, name: &Name, replacement: &RefinedType) -> ComputationType {
    match self {
      ComputationType::Produce(value, effects) => ComputationType::Produce(
        value.substitute_v(name, replacement),
        subst_row_c(effects, name, replacement),
      ),
      ComputationType::With(bundle) => {
        ComputationType::With(subst_row_c(bundle, name, replacement))
      }
      ComputationType::Arrow(param, body) => ComputationType::Arrow(
        param.substitute_v(name, replacement),
        Box::new(body.substitute_v(name, replacement)),
      ),
      ComputationType::Variable(other) => ComputationType::Variable(other.clone()),
    }
  }

  /// Returns whether the value type variable `name` occurs free in this.
  #[must_use]
  pub fn has_free_v(&self, name: &Name) -> bool {
    match self {
      ComputationType::Produce(value, effects) => {
        value.has_free_v(name) || effects.values().any(|ty| ty.has_free_v(name))
      }
      ComputationType::With(bundle) => bundle.values().any(|ty| ty.has_free_v(name)),
      ComputationType::Arrow(param, body) => param.has_free_v(name) || body.has_free_v(name),
      ComputationType::Variable(_) => false,
    }
  }

  /// Returns whether the computation type variable `name` occurs in this.
  #[must_use]
  pub fn has_free_c(&self, name: &Name) -> bool {
    match self {
      ComputationType::Produce(value, effects) => {
        value.has_free_c(name) || effects.values().any(|ty| ty.has_free_c(name))
      }
      ComputationType::With(bundle) => bundle.values().any(|ty| ty.has_free_c(name)),
      ComputationType::Arrow(param, body) => param.has_free_c(name) || body.has_free_c(name),
      ComputationType::Variable(other) => other == name,
    }
  }
}

fn subst_row_v(row: &Row<RefinedType>, name: &Name, replacement: &RefinedType) -> Row<RefinedType> {
  row.iter().map(|(key, ty)| (key.clone(), ty.substitute_v(name, replacement))).collect()
}

fn subst_row_c(
  row: &Row<ComputationType>,
  name: &Name,
  replacement: &RefinedType,
) -> Row<ComputationType> {
  row.iter().map(|(key, ty)| (key.clone(), ty.substitute_v(name, replacement))).collect()
}
