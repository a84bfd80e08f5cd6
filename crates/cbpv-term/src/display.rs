//! Printing terms.

use crate::{Branch, Computation, ComputationKind, Phase, Value, ValueKind};
use cbpv_ty::Row;
use fmt_util::comma_seq;
use std::fmt;
use str_util::Name;

impl<P: Phase> fmt::Display for Value<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.kind {
      ValueKind::Annotate(target, ty) => write!(f, "({target}) ⇐ {ty}")?,
      ValueKind::Roll(inner) => write!(f, "roll({inner})")?,
      ValueKind::Unroll(inner) => write!(f, "unroll({inner})")?,
      ValueKind::Injection(tag, inner) => write!(f, "inj_{:?}({inner})", tag.as_str())?,
      ValueKind::Variable(name) => write!(f, "var({name})")?,
      ValueKind::Thunk(body) => write!(f, "thunk({body})")?,
      ValueKind::TyAbsV(name, body) => write!(f, "tyAbsV({name}, {body})")?,
      ValueKind::Record(fields) => {
        f.write_str("record {")?;
        entries(f, fields)?;
        f.write_str("}")?;
      }
      ValueKind::Variant(tag, fields) => {
        write!(f, "variant[{tag}] {{")?;
        entries(f, fields)?;
        f.write_str("}")?;
      }
    }
    P::fmt_value_meta(&self.meta, f)
  }
}

impl<P: Phase> fmt::Display for Computation<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.kind {
      ComputationKind::Annotate(target, ty) => write!(f, "({target}) ⇐ {ty}"),
      ComputationKind::Produce(value) => write!(f, "return({value})"),
      ComputationKind::Force(value) => write!(f, "force({value})"),
      ComputationKind::Apply(func, arg) => write!(f, "({func}).apply({arg})"),
      ComputationKind::Resolve(bundle, tag) => write!(f, "({bundle}).resolve({tag})"),
      ComputationKind::Lambda(name, body) => write!(f, "λ{name}.{body}"),
      ComputationKind::With(bundle) => {
        f.write_str("λ⟨")?;
        comma_seq(f, bundle.iter().map(|(tag, body)| BundleEntry { tag, body }))?;
        f.write_str("⟩")
      }
      ComputationKind::Sequence(left, name, right) => write!(f, "let {name} = {left} in {right}"),
      ComputationKind::Def(name, bound, ty, body) => {
        write!(f, "def {name}: {ty} = {bound} in {body}")
      }
      ComputationKind::TyAppV(body, ty) => write!(f, "({body})[{ty}]"),
      ComputationKind::TyAppC(body, ty) => write!(f, "({body})[{ty}: effect]"),
      ComputationKind::Projection(value, key) => write!(f, "({value}).{key}"),
      ComputationKind::Match(value, branches) => {
        write!(f, "match({value}) {{")?;
        comma_seq(f, branches.iter().map(|(tag, branch)| BranchDisplay { tag, branch }))?;
        f.write_str("}")
      }
    }
  }
}

fn entries<P: Phase>(f: &mut fmt::Formatter<'_>, row: &Row<Value<P>>) -> fmt::Result {
  comma_seq(f, row.iter().map(|(key, value)| FieldDisplay { key, value }))
}

struct FieldDisplay<'a, P: Phase> {
  key: &'a Name,
  value: &'a Value<P>,
}

impl<P: Phase> fmt::Display for FieldDisplay<'_, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.key, self.value)
  }
}

struct BundleEntry<'a, P: Phase> {
  tag: &'a Name,
  body: &'a Computation<P>,
}

impl<P: Phase> fmt::Display for BundleEntry<'_, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}. {}", self.tag, self.body)
  }
}

struct BranchDisplay<'a, P: Phase> {
  tag: &'a Name,
  branch: &'a Branch<P>,
}

impl<P: Phase> fmt::Display for BranchDisplay<'_, P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} as {} => {}", self.tag, self.branch.binder, self.branch.body)
  }
}
