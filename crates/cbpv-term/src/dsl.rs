//! Builders for binding forms, where the body is built from the bound variable.

use crate::{Computation, Untyped, UntypedComputation, UntypedValue, Value};
use str_util::SmolStr;

/// Returns `λname. body(var(name))`.
#[must_use]
pub fn lambda<S, F>(name: S, body: F) -> Computation<Untyped>
where
  S: Into<SmolStr>,
  F: FnOnce(Value<Untyped>) -> Computation<Untyped>,
{
  let name: SmolStr = name.into();
  let body = body(UntypedValue::var(name.clone()));
  UntypedComputation::lambda(name, body)
}

/// Returns `let name = computation in body(var(name))`.
#[must_use]
pub fn bind<S, F>(computation: Computation<Untyped>, name: S, body: F) -> Computation<Untyped>
where
  S: Into<SmolStr>,
  F: FnOnce(Value<Untyped>) -> Computation<Untyped>,
{
  let name: SmolStr = name.into();
  let body = body(UntypedValue::var(name.clone()));
  computation.sequence(name, body)
}
