//! Unification: given two types, figuring out whether they can be made equal, and if so, how.
//!
//! The solution is a plain substitution map from free variable names to types, the
//! [`ProofObligations`]. There is no union-find: [`ProofObligations::apply_v`] and
//! [`ProofObligations::apply_c`] look a variable up exactly one step, and the unifiers apply both
//! sides on entry to every recursive call.

use crate::ty::{ComputationType, RefinedType, Row, ValueType};
use fast_hash::FxHashMap;
use str_util::Name;

/// A correspondence between binder names, used when comparing under binders.
///
/// When `μX. A` is unified with `μY. B`, both `X ↦ Y` and `Y ↦ X` are added, so an occurrence of
/// `X` on one side matches an occurrence of `Y` on the other.
pub type Bound = FxHashMap<Name, Name>;

/// An error when unifying.
#[derive(Debug, Clone)]
pub enum Error {
  /// Two value types could not be made equal.
  Value(RefinedType, RefinedType),
  /// Two computation types could not be made equal.
  Computation(ComputationType, ComputationType),
  /// The value type variable would be solved to a type containing it.
  ValueCircularity(Name, RefinedType),
  /// The computation type variable would be solved to a type containing it.
  ComputationCircularity(Name, ComputationType),
}

/// Whether to do the occurs check before solving a variable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Occurs {
  /// Reject solving `X` to a type that mentions `X` freely. The default.
  #[default]
  Check,
  /// Solve without checking. Solutions may be cyclic.
  Skip,
}

/// The working substitution built up by unification.
#[derive(Debug, Default, Clone)]
pub struct ProofObligations {
  value: FxHashMap<Name, RefinedType>,
  computation: FxHashMap<Name, ComputationType>,
  occurs: Occurs,
}

impl ProofObligations {
  /// Returns a new empty substitution.
  #[must_use]
  pub fn new(occurs: Occurs) -> Self {
    Self { value: FxHashMap::default(), computation: FxHashMap::default(), occurs }
  }

  /// Returns the solved value type variables.
  #[must_use]
  pub fn value_subst(&self) -> &FxHashMap<Name, RefinedType> {
    &self.value
  }

  /// Returns the solved computation type variables.
  #[must_use]
  pub fn computation_subst(&self) -> &FxHashMap<Name, ComputationType> {
    &self.computation
  }

  /// Returns whether nothing is solved yet.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.value.is_empty() && self.computation.is_empty()
  }

  /// If `ty` is a solved variable, returns what it was solved to. Otherwise returns `ty`.
  ///
  /// This is one step only: if `X ↦ Y` and `Y ↦ Z`, this returns `Y` for `X`.
  #[must_use]
  pub fn apply_v(&self, ty: &RefinedType) -> RefinedType {
    match ty.as_var().and_then(|name| self.value.get(name)) {
      Some(solved) => solved.clone(),
      None => ty.clone(),
    }
  }

  /// Like [`Self::apply_v`], for computation types.
  #[must_use]
  pub fn apply_c(&self, ty: &ComputationType) -> ComputationType {
    match ty.as_var().and_then(|name| self.computation.get(name)) {
      Some(solved) => solved.clone(),
      None => ty.clone(),
    }
  }

  /// Returns `ty` with every solved variable in it replaced by its solution, following chains.
  ///
  /// A variable whose solution leads back to itself is left as a variable.
  #[must_use]
  pub fn resolve_v(&self, ty: &RefinedType) -> RefinedType {
    resolve_v(self, &mut Vec::new(), ty)
  }

  /// Like [`Self::resolve_v`], for computation types.
  #[must_use]
  pub fn resolve_c(&self, ty: &ComputationType) -> ComputationType {
    resolve_c(self, &mut Vec::new(), ty)
  }

  /// Unifies two value types, recording solutions for free variables.
  ///
  /// # Errors
  ///
  /// If the types can't be made equal. Nothing is rolled back: after an error, this may hold some
  /// solutions from before the mismatch was found.
  pub fn unify_v(&mut self, a: &RefinedType, b: &RefinedType, bound: &Bound) -> Result<(), Error> {
    let a = self.apply_v(a);
    let b = self.apply_v(b);
    // the empty sum has no values, so it fits anywhere. this must come before solving variables.
    if a.is_bottom() || b.is_bottom() {
      return Ok(());
    }
    if let (Some(x), Some(y)) = (a.as_var(), b.as_var()) {
      if x == y || corresponds(bound, x, y) {
        return Ok(());
      }
    }
    // solve whichever side is a free variable. a bound variable is not ours to solve.
    if let Some(x) = free_var(&a, bound) {
      return self.solve_v(x, &b);
    }
    if let Some(y) = free_var(&b, bound) {
      return self.solve_v(y, &a);
    }
    if a.as_var().is_some() || b.as_var().is_some() {
      return Err(Error::Value(a.clone(), b.clone()));
    }
    match (&a.handle, &b.handle) {
      (ValueType::Recursive(n1, b1), ValueType::Recursive(n2, b2))
      | (ValueType::TyAbsV(n1, b1), ValueType::TyAbsV(n2, b2)) => {
        let mut bound = bound.clone();
        bound.insert(n1.clone(), n2.clone());
        bound.insert(n2.clone(), n1.clone());
        self.unify_v(b1, b2, &bound)
      }
      (ValueType::Sum(x), ValueType::Sum(y)) | (ValueType::Record(x), ValueType::Record(y)) => {
        if !same_keys(x, y) {
          return Err(Error::Value(a.clone(), b.clone()));
        }
        for (x, y) in x.values().zip(y.values()) {
          self.unify_v(x, y, bound)?;
        }
        Ok(())
      }
      (ValueType::Variant(t1, x), ValueType::Variant(t2, y)) => {
        if t1 != t2 || !same_keys(x, y) {
          return Err(Error::Value(a.clone(), b.clone()));
        }
        for (x, y) in x.values().zip(y.values()) {
          self.unify_v(x, y, bound)?;
        }
        Ok(())
      }
      (ValueType::Thunk(x), ValueType::Thunk(y)) => self.unify_c(x, y, bound),
      (ValueType::TyAppV(f1, a1), ValueType::TyAppV(f2, a2)) => {
        self.unify_v(f1, f2, bound)?;
        self.unify_v(a1, a2, bound)
      }
      _ => Err(Error::Value(a.clone(), b.clone())),
    }
  }

  /// Unifies two computation types, recording solutions for free variables.
  ///
  /// The parameter types of two arrows are not unified, only their bodies. Effects are ignored.
  ///
  /// # Errors
  ///
  /// If the types can't be made equal. As with [`Self::unify_v`], nothing is rolled back.
  pub fn unify_c(
    &mut self,
    a: &ComputationType,
    b: &ComputationType,
    bound: &Bound,
  ) -> Result<(), Error> {
    let a = self.apply_c(a);
    let b = self.apply_c(b);
    match (&a, &b) {
      (ComputationType::Variable(x), ComputationType::Variable(y)) if x == y => Ok(()),
      (ComputationType::Variable(x), _) => self.solve_c(x, &b),
      (_, ComputationType::Variable(y)) => self.solve_c(y, &a),
      (ComputationType::Produce(x, _), ComputationType::Produce(y, _)) => self.unify_v(x, y, bound),
      (ComputationType::Arrow(_, x), ComputationType::Arrow(_, y)) => self.unify_c(x, y, bound),
      (ComputationType::With(x), ComputationType::With(y)) => {
        if !same_keys(x, y) {
          return Err(Error::Computation(a.clone(), b.clone()));
        }
        for (x, y) in x.values().zip(y.values()) {
          self.unify_c(x, y, bound)?;
        }
        Ok(())
      }
      _ => Err(Error::Computation(a.clone(), b.clone())),
    }
  }

  /// solves the free variable `name` to `ty`.
  fn solve_v(&mut self, name: &Name, ty: &RefinedType) -> Result<(), Error> {
    if self.occurs == Occurs::Check && ty.has_free_v(name) {
      return Err(Error::ValueCircularity(name.clone(), ty.clone()));
    }
    log::debug!("solve {name} := {ty}");
    self.value.insert(name.clone(), ty.clone());
    Ok(())
  }

  fn solve_c(&mut self, name: &Name, ty: &ComputationType) -> Result<(), Error> {
    if self.occurs == Occurs::Check && ty.has_free_c(name) {
      return Err(Error::ComputationCircularity(name.clone(), ty.clone()));
    }
    log::debug!("solve {name} := {ty}");
    self.computation.insert(name.clone(), ty.clone());
    Ok(())
  }
}

fn free_var<'a>(ty: &'a RefinedType, bound: &Bound) -> Option<&'a Name> {
  ty.as_var().filter(|&name| !bound.contains_key(name))
}

fn corresponds(bound: &Bound, x: &Name, y: &Name) -> bool {
  bound.get(x) == Some(y) || bound.get(y) == Some(x)
}

fn same_keys<T>(x: &Row<T>, y: &Row<T>) -> bool {
  x.len() == y.len() && x.keys().eq(y.keys())
}

fn resolve_v(
  obligations: &ProofObligations,
  visiting: &mut Vec<Name>,
  ty: &RefinedType,
) -> RefinedType {
  let handle = match &ty.handle {
    ValueType::Variable(name) => match obligations.value.get(name) {
      Some(solved) if !visiting.contains(name) => {
        visiting.push(name.clone());
        let ret = resolve_v(obligations, visiting, solved);
        visiting.pop();
        return ret;
      }
      Some(_) | None => ValueType::Variable(name.clone()),
    },
    ValueType::Sum(row) => ValueType::Sum(resolve_row_v(obligations, visiting, row)),
    ValueType::Record(row) => ValueType::Record(resolve_row_v(obligations, visiting, row)),
    ValueType::Variant(tag, row) => {
      ValueType::Variant(tag.clone(), resolve_row_v(obligations, visiting, row))
    }
    ValueType::Thunk(body) => ValueType::Thunk(Box::new(resolve_c(obligations, visiting, body))),
    ValueType::Recursive(binder, body) => {
      ValueType::Recursive(binder.clone(), Box::new(resolve_v(obligations, visiting, body)))
    }
    ValueType::TyAbsV(binder, body) => {
      ValueType::TyAbsV(binder.clone(), Box::new(resolve_v(obligations, visiting, body)))
    }
    ValueType::TyAppV(func, arg) => ValueType::TyAppV(
      Box::new(resolve_v(obligations, visiting, func)),
      Box::new(resolve_v(obligations, visiting, arg)),
    ),
  };
  RefinedType::new(handle)
}

fn resolve_c(
  obligations: &ProofObligations,
  visiting: &mut Vec<Name>,
  ty: &ComputationType,
) -> ComputationType {
  match ty {
    ComputationType::Variable(name) => match obligations.computation.get(name) {
      Some(solved) if !visiting.contains(name) => {
        visiting.push(name.clone());
        let ret = resolve_c(obligations, visiting, solved);
        visiting.pop();
        ret
      }
      Some(_) | None => ComputationType::Variable(name.clone()),
    },
    ComputationType::Produce(value, effects) => ComputationType::Produce(
      resolve_v(obligations, visiting, value),
      effects.iter().map(|(k, ty)| (k.clone(), resolve_c(obligations, visiting, ty))).collect(),
    ),
    ComputationType::With(bundle) => ComputationType::With(
      bundle.iter().map(|(k, ty)| (k.clone(), resolve_c(obligations, visiting, ty))).collect(),
    ),
    ComputationType::Arrow(param, body) => ComputationType::Arrow(
      resolve_v(obligations, visiting, param),
      Box::new(resolve_c(obligations, visiting, body)),
    ),
  }
}

fn resolve_row_v(
  obligations: &ProofObligations,
  visiting: &mut Vec<Name>,
  row: &Row<RefinedType>,
) -> Row<RefinedType> {
  row.iter().map(|(k, ty)| (k.clone(), resolve_v(obligations, visiting, ty))).collect()
}
