//! Helpers for running the statics on small trees.

use cbpv_statics::{Error, St, Typer};
use cbpv_term::{TypedComputation, TypedValue, UntypedComputation, UntypedValue};
use cbpv_ty::{ComputationType, RefinedType};
use config::DiagnosticLines;
use str_util::Name;

/// Variables in scope for a check, with their types.
pub(crate) type Vars<'a> = &'a [(&'a str, RefinedType)];

fn run<T, F>(vars: Vars<'_>, f: F) -> Result<T, Error>
where
  F: FnOnce(&Typer<'_>, &mut St) -> Result<T, Error>,
{
  // ignore the Err if we already initialized logging, since that's fine.
  let _ = env_logger::builder().is_test(true).try_init();
  let mut st = St::default();
  let mut typer = Typer::root();
  for (name, ty) in vars {
    typer.with_v(Name::new(*name), ty.clone())?;
  }
  f(&typer, &mut st)
}

#[track_caller]
fn ok<T>(res: Result<T, Error>) -> T {
  match res {
    Ok(x) => x,
    Err(e) => panic!("unexpected error: {}", e.display(DiagnosticLines::One)),
  }
}

#[track_caller]
fn err<T>(res: Result<T, Error>, want: &str) {
  match res {
    Ok(_) => panic!("unexpected pass, wanted: {want}"),
    Err(e) => pretty_assertions::assert_eq!(want, e.display(DiagnosticLines::One).to_string()),
  }
}

/// checks `value` against `ty`, which should succeed.
#[track_caller]
pub(crate) fn check_v(vars: Vars<'_>, value: &UntypedValue, ty: &RefinedType) -> TypedValue {
  ok(run(vars, |typer, st| typer.check_v(st, value, ty)))
}

/// checks `comp` against `ty`, which should succeed.
#[track_caller]
pub(crate) fn check_c(
  vars: Vars<'_>,
  comp: &UntypedComputation,
  ty: &ComputationType,
) -> TypedComputation {
  ok(run(vars, |typer, st| typer.check_c(st, comp, ty)))
}

/// infers the type of `value`, which should succeed.
#[track_caller]
pub(crate) fn infer_v(vars: Vars<'_>, value: &UntypedValue) -> TypedValue {
  ok(run(vars, |typer, st| typer.infer_v(st, value)))
}

/// infers the type of `comp`, which should succeed.
#[track_caller]
pub(crate) fn infer_c(vars: Vars<'_>, comp: &UntypedComputation) -> TypedComputation {
  ok(run(vars, |typer, st| typer.infer_c(st, comp)))
}

/// like [`check_v`], but should fail with the message `want`.
#[track_caller]
pub(crate) fn fail_v(vars: Vars<'_>, value: &UntypedValue, ty: &RefinedType, want: &str) {
  err(run(vars, |typer, st| typer.check_v(st, value, ty)), want);
}

/// like [`check_c`], but should fail with the message `want`.
#[track_caller]
pub(crate) fn fail_c(
  vars: Vars<'_>,
  comp: &UntypedComputation,
  ty: &ComputationType,
  want: &str,
) {
  err(run(vars, |typer, st| typer.check_c(st, comp, ty)), want);
}

/// like [`infer_v`], but should fail with the message `want`.
#[track_caller]
pub(crate) fn fail_infer_v(vars: Vars<'_>, value: &UntypedValue, want: &str) {
  err(run(vars, |typer, st| typer.infer_v(st, value)), want);
}

/// like [`infer_c`], but should fail with the message `want`.
#[track_caller]
pub(crate) fn fail_infer_c(vars: Vars<'_>, comp: &UntypedComputation, want: &str) {
  err(run(vars, |typer, st| typer.infer_c(st, comp)), want);
}

/// no fields, for building empty rows without naming the types.
pub(crate) fn none<T>() -> [(&'static str, T); 0] {
  []
}

/// `record {}`.
pub(crate) fn unit() -> RefinedType {
  RefinedType::record(none())
}

/// a variant type with no fields.
pub(crate) fn tag(name: &str) -> RefinedType {
  RefinedType::variant(name, none())
}

/// the value of [`tag`].
pub(crate) fn tag_v(name: &str) -> UntypedValue {
  UntypedValue::variant(name, none())
}

/// `∑(false: variant[false] {}, true: variant[true] {})`.
pub(crate) fn bool_ty() -> RefinedType {
  RefinedType::sum([("false", tag("false")), ("true", tag("true"))])
}

/// `μX. ∑(succ: variant[succ] {0: X}, zero: variant[zero] {})`.
pub(crate) fn nat() -> RefinedType {
  RefinedType::recursive(
    "X",
    RefinedType::sum([
      ("zero", tag("zero")),
      ("succ", RefinedType::variant("succ", [("0", RefinedType::var("X"))])),
    ]),
  )
}

/// `produce(record {})`.
pub(crate) fn unit_c() -> ComputationType {
  ComputationType::produce(unit())
}
