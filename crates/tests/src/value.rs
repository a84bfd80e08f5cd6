//! Checking and inferring values.

use crate::check::{
  bool_ty, check_v, fail_infer_v, fail_v, infer_v, nat, none, tag, tag_v, unit, unit_c,
};
use cbpv_statics::{St, Typer};
use cbpv_term::{UntypedValue, ValueKind};
use cbpv_ty::{ComputationType, RefinedType};
use config::{Cfg, DiagnosticLines};
use pretty_assertions::assert_eq;
use str_util::Name;

#[test]
fn record() {
  let ty = RefinedType::record([("a", unit()), ("b", bool_ty())]);
  let v = UntypedValue::record([
    ("a", UntypedValue::record(none())),
    ("b", tag_v("true").inject("true")),
  ]);
  let typed = check_v(&[], &v, &ty);
  assert_eq!(typed.ty(), &ty);
  let ValueKind::Record(fields) = &typed.kind else { panic!("not a record") };
  assert_eq!(fields.get("b").map(|x| x.ty()), Some(&bool_ty()));
}

#[test]
fn record_missing_key() {
  let ty = RefinedType::record([("a", unit())]);
  fail_v(&[], &UntypedValue::record(none()), &ty, "missing record field: a");
}

#[test]
fn record_extra_key() {
  let v = UntypedValue::record([("a", UntypedValue::var("x"))]);
  fail_v(&[], &v, &unit(), "extra record field: a");
}

#[test]
fn variant_tag_mismatch() {
  fail_v(&[], &tag_v("a"), &tag("b"), "mismatched variant tags: expected b, found a");
}

#[test]
fn variant_missing_key() {
  let ty = RefinedType::variant("pair", [("0", unit()), ("1", unit())]);
  let v = UntypedValue::variant("pair", [("0", UntypedValue::record(none()))]);
  fail_v(&[], &v, &ty, "missing variant field: 1");
}

#[test]
fn variant_extra_key() {
  let v = UntypedValue::variant("a", [("0", UntypedValue::record(none()))]);
  fail_v(&[], &v, &tag("a"), "extra variant field: 0");
}

#[test]
fn injection_missing_tag() {
  fail_v(&[], &tag_v("maybe").inject("maybe"), &bool_ty(), "tag not in sum type: maybe");
}

#[test]
fn injection_nested_error() {
  fail_v(
    &[],
    &tag_v("false").inject("true"),
    &bool_ty(),
    "mismatched variant tags: expected true, found false",
  );
}

#[test]
fn variable() {
  let typed = infer_v(&[("x", nat())], &UntypedValue::var("x"));
  assert_eq!(typed.ty(), &nat());
}

#[test]
fn unknown_variable() {
  fail_infer_v(&[("x", nat())], &UntypedValue::var("y"), "undefined variable: y");
}

#[test]
fn annotate() {
  let v = tag_v("zero").inject("zero").roll().annotate(nat());
  let typed = infer_v(&[], &v);
  assert_eq!(typed.ty(), &nat());
  assert!(matches!(typed.kind, ValueKind::Annotate(_, _)));
}

#[test]
fn unroll() {
  let typed = infer_v(&[("n", nat())], &UntypedValue::var("n").unroll());
  assert_eq!(typed.ty(), &nat().unroll());
}

#[test]
fn unroll_wrong_type() {
  fail_infer_v(
    &[("x", unit())],
    &UntypedValue::var("x").unroll(),
    "cannot unroll a value of non-recursive type: record {}",
  );
}

#[test]
fn no_inference_rule() {
  fail_infer_v(
    &[],
    &UntypedValue::record(none()),
    "cannot infer the type of this value, annotate it: record {}",
  );
  fail_v(
    &[],
    &tag_v("zero").inject("zero"),
    &RefinedType::var("T"),
    r#"cannot infer the type of this value, annotate it: inj_"zero"(variant[zero] {})"#,
  );
}

#[test]
fn mismatch() {
  fail_v(
    &[("x", unit())],
    &UntypedValue::var("x"),
    &bool_ty(),
    "incompatible value types: expected ∑(false: variant[false] {}, true: variant[true] {}), found record {}",
  );
}

#[test]
fn mismatch_many_lines() {
  let mut st = St::default();
  let mut typer = Typer::root();
  typer.with_v(Name::new("x"), unit()).unwrap();
  let e = typer.check_v(&mut st, &UntypedValue::var("x"), &tag("a")).unwrap_err();
  assert!(e.is_unify());
  assert!(matches!(e.severity(), diagnostic::Severity::Error));
  let want = "incompatible value types\n  expected variant[a] {}\n     found record {}";
  assert_eq!(e.display(DiagnosticLines::Many).to_string(), want);
}

#[test]
fn thunk() {
  let ty = RefinedType::thunk(ComputationType::arrow(unit(), unit_c()));
  let v = cbpv_term::dsl::lambda("x", UntypedValue::ret).thunk();
  let typed = check_v(&[], &v, &ty);
  assert_eq!(typed.ty(), &ty);
}

#[test]
fn ty_abs() {
  // the type's binder is renamed to the value's, so x: A fits.
  let ty = RefinedType::ty_abs("B", RefinedType::var("B"));
  let v = UntypedValue::ty_abs("A", UntypedValue::var("x"));
  let typed = check_v(&[("x", RefinedType::var("A"))], &v, &ty);
  let ValueKind::TyAbsV(name, body) = &typed.kind else { panic!("not a ty abs") };
  assert_eq!(name.as_str(), "A");
  assert_eq!(body.ty(), &RefinedType::var("A"));
}

#[test]
fn variable_of_quantified_type() {
  let ty =
    RefinedType::ty_abs("A", RefinedType::thunk(ComputationType::produce(RefinedType::var("A"))));
  let other =
    RefinedType::ty_abs("B", RefinedType::thunk(ComputationType::produce(RefinedType::var("B"))));
  check_v(&[("id", ty)], &UntypedValue::var("id"), &other);
}

#[test]
fn solves_metavariable() {
  let mut st = St::default();
  let mut typer = Typer::root();
  typer.with_v(Name::new("x"), bool_ty()).unwrap();
  let meta = st.names().fresh_v();
  let typed = typer.check_v(&mut st, &UntypedValue::var("x"), &meta).unwrap();
  assert_eq!(typed.ty(), &bool_ty());
  assert_eq!(st.apply_v(&meta), bool_ty());
}

#[test]
fn checks_against_solved_metavariable() {
  let mut st = St::default();
  let typer = Typer::root();
  let meta = st.names().fresh_v();
  st.unify_v(&meta, &unit()).unwrap();
  let typed = typer.check_v(&mut st, &UntypedValue::record(none()), &meta).unwrap();
  assert_eq!(typed.ty(), &unit());
}

#[test]
fn check_is_self_consistent() {
  let mut st = St::default();
  let mut typer = Typer::root();
  typer.with_v(Name::new("n"), nat()).unwrap();
  let v = UntypedValue::variant("succ", [("0", UntypedValue::var("n"))]).inject("succ").roll();
  let typed = typer.check_v(&mut st, &v, &nat()).unwrap();
  let before = st.obligations().value_subst().len();
  st.unify_v(&nat(), typed.ty()).unwrap();
  assert_eq!(st.obligations().value_subst().len(), before);
}

#[test]
fn name_conflict() {
  let mut typer = Typer::root();
  typer.with_v(Name::new("x"), unit()).unwrap();
  let e = typer.with_v(Name::new("x"), unit()).unwrap_err();
  assert_eq!(e.display(DiagnosticLines::One).to_string(), "duplicate variable in one scope: x");
}

#[test]
fn shadowing() {
  let mut typer = Typer::root();
  typer.with_v(Name::new("x"), unit()).unwrap();
  let mut sub = typer.subscope();
  sub.with_v(Name::new("x"), nat()).unwrap();
  assert_eq!(sub.resolve_v(&Name::new("x")).unwrap(), &nat());
  sub.with_v(Name::new("y"), bool_ty()).unwrap();
  assert_eq!(typer.resolve_v(&Name::new("x")).unwrap(), &unit());
  assert!(typer.resolve_v(&Name::new("y")).is_err());
}

#[test]
fn occurs_check_config() {
  let x = RefinedType::var("X");
  let cyclic = RefinedType::thunk(ComputationType::produce(x.clone()));
  let mut st = St::new(Cfg::default());
  let e = st.unify_v(&x, &cyclic).unwrap_err();
  assert_eq!(
    e.display(DiagnosticLines::One).to_string(),
    "circular type: X occurs in thunk(produce(X))"
  );
  let mut st = St::new(Cfg { occurs_check: false, ..Cfg::default() });
  st.unify_v(&x, &cyclic).unwrap();
}

#[test]
fn ty_abs_binder_is_solvable() {
  // the value's binder stands in for the type's, and unification may solve it.
  let x = RefinedType::record([("a", unit())]);
  let v = UntypedValue::ty_abs("A", UntypedValue::var("x"));
  let ty = RefinedType::ty_abs("B", RefinedType::var("B"));
  let typed = check_v(&[("x", x)], &v, &ty);
  assert_eq!(typed.ty(), &ty);
}
