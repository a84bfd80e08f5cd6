//! Alpha-aware equality and hashing.
//!
//! Two types are equal if they are the same up to the names of `Recursive` and `TyAbsV` binders.
//! A bound variable is compared by the position of its binder, a free variable by its name.

use crate::ty::{ComputationType, RefinedType, Row, ValueType};
use std::hash::{Hash, Hasher};
use std::mem::discriminant;
use str_util::Name;

/// The binders passed on the way down, innermost last.
type Binders<'a> = Vec<&'a Name>;

impl PartialEq for ValueType {
  fn eq(&self, other: &Self) -> bool {
    eq_v(&mut Vec::new(), &mut Vec::new(), self, other)
  }
}

impl Eq for ValueType {}

impl PartialEq for ComputationType {
  fn eq(&self, other: &Self) -> bool {
    eq_c(&mut Vec::new(), &mut Vec::new(), self, other)
  }
}

impl Eq for ComputationType {}

impl Hash for ValueType {
  fn hash<H: Hasher>(&self, state: &mut H) {
    hash_v(&mut Vec::new(), self, state);
  }
}

impl Hash for ComputationType {
  fn hash<H: Hasher>(&self, state: &mut H) {
    hash_c(&mut Vec::new(), self, state);
  }
}

fn eq_v<'a>(
  lhs: &mut Binders<'a>,
  rhs: &mut Binders<'a>,
  a: &'a ValueType,
  b: &'a ValueType,
) -> bool {
  match (a, b) {
    (ValueType::Sum(x), ValueType::Sum(y)) | (ValueType::Record(x), ValueType::Record(y)) => {
      eq_rows_v(lhs, rhs, x, y)
    }
    (ValueType::Variant(t1, x), ValueType::Variant(t2, y)) => {
      t1 == t2 && eq_rows_v(lhs, rhs, x, y)
    }
    (ValueType::Thunk(x), ValueType::Thunk(y)) => eq_c(lhs, rhs, x, y),
    (ValueType::Recursive(n1, b1), ValueType::Recursive(n2, b2))
    | (ValueType::TyAbsV(n1, b1), ValueType::TyAbsV(n2, b2)) => {
      lhs.push(n1);
      rhs.push(n2);
      let ret = eq_v(lhs, rhs, &b1.handle, &b2.handle);
      lhs.pop();
      rhs.pop();
      ret
    }
    (ValueType::Variable(x), ValueType::Variable(y)) => {
      match (lhs.iter().rposition(|&n| n == x), rhs.iter().rposition(|&n| n == y)) {
        (Some(i), Some(j)) => i == j,
        (None, None) => x == y,
        (Some(_), None) | (None, Some(_)) => false,
      }
    }
    (ValueType::TyAppV(f1, a1), ValueType::TyAppV(f2, a2)) => {
      eq_v(lhs, rhs, &f1.handle, &f2.handle) && eq_v(lhs, rhs, &a1.handle, &a2.handle)
    }
    _ => false,
  }
}

fn eq_c<'a>(
  lhs: &mut Binders<'a>,
  rhs: &mut Binders<'a>,
  a: &'a ComputationType,
  b: &'a ComputationType,
) -> bool {
  match (a, b) {
    (ComputationType::Produce(v1, e1), ComputationType::Produce(v2, e2)) => {
      eq_v(lhs, rhs, &v1.handle, &v2.handle) && eq_rows_c(lhs, rhs, e1, e2)
    }
    (ComputationType::With(x), ComputationType::With(y)) => eq_rows_c(lhs, rhs, x, y),
    (ComputationType::Arrow(p1, b1), ComputationType::Arrow(p2, b2)) => {
      eq_v(lhs, rhs, &p1.handle, &p2.handle) && eq_c(lhs, rhs, b1, b2)
    }
    (ComputationType::Variable(x), ComputationType::Variable(y)) => x == y,
    _ => false,
  }
}

fn eq_rows_v<'a>(
  lhs: &mut Binders<'a>,
  rhs: &mut Binders<'a>,
  x: &'a Row<RefinedType>,
  y: &'a Row<RefinedType>,
) -> bool {
  x.len() == y.len()
    && x
      .iter()
      .zip(y)
      .all(|((k1, t1), (k2, t2))| k1 == k2 && eq_v(lhs, rhs, &t1.handle, &t2.handle))
}

fn eq_rows_c<'a>(
  lhs: &mut Binders<'a>,
  rhs: &mut Binders<'a>,
  x: &'a Row<ComputationType>,
  y: &'a Row<ComputationType>,
) -> bool {
  x.len() == y.len()
    && x.iter().zip(y).all(|((k1, t1), (k2, t2))| k1 == k2 && eq_c(lhs, rhs, t1, t2))
}

fn hash_v<'a, H: Hasher>(binders: &mut Binders<'a>, ty: &'a ValueType, state: &mut H) {
  discriminant(ty).hash(state);
  match ty {
    ValueType::Sum(row) | ValueType::Record(row) => hash_row_v(binders, row, state),
    ValueType::Variant(tag, row) => {
      tag.hash(state);
      hash_row_v(binders, row, state);
    }
    ValueType::Thunk(body) => hash_c(binders, body, state),
    ValueType::Recursive(binder, body) | ValueType::TyAbsV(binder, body) => {
      binders.push(binder);
      hash_v(binders, &body.handle, state);
      binders.pop();
    }
    ValueType::Variable(name) => match binders.iter().rposition(|&n| n == name) {
      Some(idx) => {
        0u8.hash(state);
        idx.hash(state);
      }
      None => {
        1u8.hash(state);
        name.hash(state);
      }
    },
    ValueType::TyAppV(func, arg) => {
      hash_v(binders, &func.handle, state);
      hash_v(binders, &arg.handle, state);
    }
  }
}

fn hash_c<'a, H: Hasher>(binders: &mut Binders<'a>, ty: &'a ComputationType, state: &mut H) {
  discriminant(ty).hash(state);
  match ty {
    ComputationType::Produce(value, effects) => {
      hash_v(binders, &value.handle, state);
      hash_row_c(binders, effects, state);
    }
    ComputationType::With(bundle) => hash_row_c(binders, bundle, state),
    ComputationType::Arrow(param, body) => {
      hash_v(binders, &param.handle, state);
      hash_c(binders, body, state);
    }
    ComputationType::Variable(name) => name.hash(state),
  }
}

fn hash_row_v<'a, H: Hasher>(
  binders: &mut Binders<'a>,
  row: &'a Row<RefinedType>,
  state: &mut H,
) {
  row.len().hash(state);
  for (name, ty) in row {
    name.hash(state);
    hash_v(binders, &ty.handle, state);
  }
}

fn hash_row_c<'a, H: Hasher>(
  binders: &mut Binders<'a>,
  row: &'a Row<ComputationType>,
  state: &mut H,
) {
  row.len().hash(state);
  for (name, ty) in row {
    name.hash(state);
    hash_c(binders, ty, state);
  }
}
