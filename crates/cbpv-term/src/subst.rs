//! Substituting values for term variables.
//!
//! The metadata at every node is kept as is, so substituting into a typed tree gives a typed tree,
//! as long as the replacement has the type the variable had.

use crate::{Branch, Computation, ComputationKind, Phase, Value, ValueKind};
use cbpv_ty::Row;
use str_util::Name;

impl<P: Phase> Value<P> {
  /// Returns this with free occurrences of the variable `name` replaced by `value`.
  #[must_use]
  pub fn substitute_v(&self, name: &Name, value: &Value<P>) -> Value<P> {
    let kind = match &self.kind {
      ValueKind::Variable(other) => {
        if other == name {
          return value.clone();
        }
        ValueKind::Variable(other.clone())
      }
      ValueKind::Annotate(target, ty) => {
        ValueKind::Annotate(Box::new(target.substitute_v(name, value)), ty.clone())
      }
      ValueKind::Roll(inner) => ValueKind::Roll(Box::new(inner.substitute_v(name, value))),
      ValueKind::Unroll(inner) => ValueKind::Unroll(Box::new(inner.substitute_v(name, value))),
      ValueKind::Injection(tag, inner) => {
        ValueKind::Injection(tag.clone(), Box::new(inner.substitute_v(name, value)))
      }
      ValueKind::Thunk(body) => ValueKind::Thunk(Box::new(body.substitute_v(name, value))),
      // binds a type variable, not a term variable
      ValueKind::TyAbsV(binder, body) => {
        ValueKind::TyAbsV(binder.clone(), Box::new(body.substitute_v(name, value)))
      }
      ValueKind::Record(fields) => ValueKind::Record(subst_row(fields, name, value)),
      ValueKind::Variant(tag, fields) => {
        ValueKind::Variant(tag.clone(), subst_row(fields, name, value))
      }
    };
    Value { kind, meta: self.meta.clone() }
  }
}

impl<P: Phase> Computation<P> {
  /// Returns this with free occurrences of the variable `name` replaced by `value`.
  ///
  /// Stops at binders that rebind `name`.
  #[must_use]
  pub fn substitute_v(&self, name: &Name, value: &Value<P>) -> Computation<P> {
    let kind = match &self.kind {
      ComputationKind::Annotate(target, ty) => {
        ComputationKind::Annotate(Box::new(target.substitute_v(name, value)), ty.clone())
      }
      ComputationKind::Produce(inner) => {
        ComputationKind::Produce(Box::new(inner.substitute_v(name, value)))
      }
      ComputationKind::Force(inner) => {
        ComputationKind::Force(Box::new(inner.substitute_v(name, value)))
      }
      ComputationKind::Apply(func, arg) => ComputationKind::Apply(
        Box::new(func.substitute_v(name, value)),
        Box::new(arg.substitute_v(name, value)),
      ),
      ComputationKind::Resolve(bundle, tag) => {
        ComputationKind::Resolve(Box::new(bundle.substitute_v(name, value)), tag.clone())
      }
      ComputationKind::Lambda(param, body) => {
        if param == name {
          return self.clone();
        }
        ComputationKind::Lambda(param.clone(), Box::new(body.substitute_v(name, value)))
      }
      ComputationKind::With(bundle) => ComputationKind::With(
        bundle.iter().map(|(tag, c)| (tag.clone(), c.substitute_v(name, value))).collect(),
      ),
      ComputationKind::Sequence(left, binder, right) => {
        let left = Box::new(left.substitute_v(name, value));
        let right =
          if binder == name { right.clone() } else { Box::new(right.substitute_v(name, value)) };
        ComputationKind::Sequence(left, binder.clone(), right)
      }
      ComputationKind::Def(binder, bound, ty, body) => {
        // recursive, so the name is bound in both
        if binder == name {
          return self.clone();
        }
        ComputationKind::Def(
          binder.clone(),
          Box::new(bound.substitute_v(name, value)),
          ty.clone(),
          Box::new(body.substitute_v(name, value)),
        )
      }
      ComputationKind::TyAppV(body, ty) => {
        ComputationKind::TyAppV(Box::new(body.substitute_v(name, value)), ty.clone())
      }
      ComputationKind::TyAppC(body, ty) => {
        ComputationKind::TyAppC(Box::new(body.substitute_v(name, value)), ty.clone())
      }
      ComputationKind::Projection(inner, key) => {
        ComputationKind::Projection(Box::new(inner.substitute_v(name, value)), key.clone())
      }
      ComputationKind::Match(scrutinee, branches) => {
        let branches = branches
          .iter()
          .map(|(tag, branch)| {
            let body = if &branch.binder == name {
              branch.body.clone()
            } else {
              branch.body.substitute_v(name, value)
            };
            (tag.clone(), Branch { binder: branch.binder.clone(), body })
          })
          .collect();
        ComputationKind::Match(Box::new(scrutinee.substitute_v(name, value)), branches)
      }
    };
    Computation { kind, meta: self.meta.clone() }
  }
}

fn subst_row<P: Phase>(row: &Row<Value<P>>, name: &Name, value: &Value<P>) -> Row<Value<P>> {
  row.iter().map(|(key, v)| (key.clone(), v.substitute_v(name, value))).collect()
}
