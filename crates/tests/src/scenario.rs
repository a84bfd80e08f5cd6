//! Whole checks of small programs, end to end.

use crate::check::{check_v, fail_c, fail_infer_c, nat, none, tag_v, unit, unit_c};
use cbpv_statics::St;
use cbpv_term::{ComputationKind, UntypedComputation, UntypedValue, ValueKind, dsl};
use cbpv_ty::unify::Bound;
use cbpv_ty::{ComputationType, ProofObligations, RefinedType};
use config::DiagnosticLines;
use pretty_assertions::assert_eq;
use str_util::Name;

#[test]
fn empty_record() {
  let typed = check_v(&[], &UntypedValue::record(none()), &unit());
  assert!(matches!(&typed.kind, ValueKind::Record(fields) if fields.is_empty()));
  assert_eq!(typed.ty(), &unit());
}

#[test]
fn zero() {
  let zero = tag_v("zero").inject("zero").roll();
  let typed = check_v(&[], &zero, &nat());
  assert_eq!(typed.ty(), &nat());
}

#[test]
fn succ() {
  let succ = UntypedValue::variant("succ", [("0", UntypedValue::var("n"))]).inject("succ").roll();
  let typed = check_v(&[("n", nat())], &succ, &nat());
  assert_eq!(typed.ty(), &nat());
  let ValueKind::Roll(inj) = &typed.kind else { panic!("not roll") };
  let ValueKind::Injection(_, variant) = &inj.kind else { panic!("not injection") };
  let ValueKind::Variant(_, fields) = &variant.kind else { panic!("not variant") };
  // one unroll in, the field is a nat again.
  assert_eq!(fields.get("0").map(|x| x.ty()), Some(&nat()));
}

#[test]
fn sequence_non_produce() {
  let f = ComputationType::arrow(unit(), unit_c()).thunk();
  let c = dsl::bind(UntypedValue::var("f").force(), "y", UntypedValue::ret);
  fail_infer_c(
    &[("f", f)],
    &c,
    "cannot sequence a computation that does not produce: (record {}) -> (produce(record {}))",
  );
}

#[test]
fn bottom_before_variable() {
  let mut obligations = ProofObligations::default();
  obligations.unify_v(&RefinedType::var("X"), &RefinedType::bottom(), &Bound::default()).unwrap();
  assert!(obligations.is_empty());
}

#[test]
fn with_missing_member() {
  let ty = ComputationType::with([("f", unit_c()), ("g", unit_c())]);
  let c = UntypedComputation::with([("f", UntypedValue::record(none()).ret())]);
  fail_c(&[], &c, &ty, "missing bundle member: g");
}

#[test]
fn apply_is_stable() {
  let mut st = St::default();
  st.unify_v(&RefinedType::var("X"), &nat()).unwrap();
  let once = st.apply_v(&RefinedType::var("X"));
  assert_eq!(once, nat());
  assert_eq!(st.apply_v(&RefinedType::var("X")), once);
  st.unify_c(&ComputationType::var("C"), &unit_c()).unwrap();
  let once = st.apply_c(&ComputationType::var("C"));
  assert_eq!(once, unit_c());
  assert_eq!(st.apply_c(&ComputationType::var("C")), once);
}

#[test]
fn check_then_unify_adds_nothing() {
  let mut st = St::default();
  let meta = st.names().fresh_v();
  let mut typer = cbpv_statics::Typer::root();
  typer.with_v(Name::new("n"), nat()).unwrap();
  let succ = UntypedValue::variant("succ", [("0", UntypedValue::var("n"))]).inject("succ").roll();
  let typed = typer.check_v(&mut st, &succ.annotate(nat()), &meta).unwrap();
  let before = st.obligations().value_subst().len();
  st.unify_v(&meta, typed.ty()).unwrap();
  assert_eq!(st.obligations().value_subst().len(), before);
}

#[test]
fn check_c_then_unify_adds_nothing() {
  let mut st = St::default();
  let member = st.names().fresh_c();
  let param = st.names().fresh_v();
  let ret = st.names().fresh_v();
  let ty = ComputationType::with([
    ("go", member),
    ("id", ComputationType::arrow(param, ComputationType::produce(ret))),
  ]);
  let mut typer = cbpv_statics::Typer::root();
  let k = ComputationType::produce(unit()).thunk();
  typer.with_v(Name::new("k"), k).unwrap();
  let c = UntypedComputation::with([
    ("go", UntypedValue::var("k").force()),
    ("id", dsl::lambda("x", UntypedValue::ret)),
  ]);
  let typed = typer.check_c(&mut st, &c, &ty).unwrap();
  let value = st.obligations().value_subst().len();
  let computation = st.obligations().computation_subst().len();
  st.unify_c(&ty, typed.ty()).unwrap();
  assert_eq!(st.obligations().value_subst().len(), value);
  assert_eq!(st.obligations().computation_subst().len(), computation);
}

#[test]
fn program() {
  // def id = λx.return(var(x)) in (force(var(id))).apply(record {})
  let ty = ComputationType::arrow(unit(), unit_c());
  let body = UntypedValue::var("id").force().apply(UntypedValue::record(none()));
  let prog = UntypedComputation::def("id", dsl::lambda("x", UntypedValue::ret), ty, body);
  let mut st = St::default();
  let typed = cbpv_statics::get(&mut st, &prog).unwrap();
  assert_eq!(typed.ty(), &unit_c());
  let ComputationKind::Def(_, bound, _, _) = &typed.kind else { panic!("not def") };
  assert_eq!(bound.ty(), &ComputationType::arrow(unit(), unit_c()));
  let typed = cbpv_statics::get_checked(&mut st, &prog, &unit_c()).unwrap();
  assert_eq!(typed.ty(), &unit_c());
}

#[test]
fn program_error() {
  let prog = UntypedValue::var("main").force();
  let mut st = St::default();
  let e = cbpv_statics::get(&mut st, &prog).unwrap_err();
  assert_eq!(e.display(DiagnosticLines::One).to_string(), "undefined variable: main");
  assert!(!e.is_unify());
}
