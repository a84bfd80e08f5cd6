//! Reading the config file, and what the settings change.

use cbpv_statics::St;
use cbpv_ty::{ComputationType, RefinedType};
use config::{Cfg, DiagnosticLines, file};
use pretty_assertions::assert_eq;

#[test]
fn default() {
  let cfg = Cfg::default();
  assert!(cfg.occurs_check);
  assert_eq!(cfg.lines, DiagnosticLines::One);
}

#[test]
fn full() {
  let contents = r#"
version = 1

[check]
occurs-check = false

[diagnostics]
lines = "many"
"#;
  let cfg = file::parse(contents).unwrap();
  assert_eq!(cfg, Cfg { occurs_check: false, lines: DiagnosticLines::Many });
}

#[test]
fn minimal() {
  let cfg = file::parse("version = 1\n").unwrap();
  assert_eq!(cfg, Cfg::default());
}

#[test]
fn wrong_version() {
  let e = file::parse("version = 2\n").unwrap_err();
  assert!(matches!(e, file::Error::Version(2)));
  assert_eq!(e.to_string(), "invalid config version: expected 1, found 2");
}

#[test]
fn not_toml() {
  let e = file::parse("version = ").unwrap_err();
  assert!(matches!(e, file::Error::Parse(_)));
  assert!(e.to_string().starts_with("couldn't parse config: "));
}

#[test]
fn unknown_field() {
  let e = file::parse("version = 1\n[check]\nkinds = true\n").unwrap_err();
  assert!(matches!(e, file::Error::Parse(_)));
}

#[test]
fn missing_version() {
  let e = file::parse("[diagnostics]\nlines = \"one\"\n").unwrap_err();
  assert!(matches!(e, file::Error::Parse(_)));
}

#[test]
fn occurs_check_off() {
  let cfg = file::parse("version = 1\n[check]\noccurs-check = false\n").unwrap();
  let mut st = St::new(cfg);
  let cyclic = ComputationType::produce(RefinedType::var("X")).thunk();
  st.unify_v(&RefinedType::var("X"), &cyclic).unwrap();
  assert_eq!(st.apply_v(&RefinedType::var("X")), cyclic);
  // the deep walk stops at the cycle instead of looping.
  let resolved = st.obligations().resolve_v(&RefinedType::var("X"));
  assert_eq!(resolved, cyclic);
}

#[test]
fn many_lines() {
  let cfg = file::parse("version = 1\n[diagnostics]\nlines = \"many\"\n").unwrap();
  let mut st = St::new(cfg);
  let want = RefinedType::record([("a", RefinedType::record(none()))]);
  let e = st.unify_v(&want, &RefinedType::record(none())).unwrap_err();
  assert_eq!(
    e.display(st.cfg().lines).to_string(),
    "incompatible value types\n  expected record {a: record {}}\n     found record {}"
  );
}

fn none() -> [(&'static str, RefinedType); 0] {
  []
}
