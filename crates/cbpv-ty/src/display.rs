//! Displaying types, for diagnostics.

use crate::ty::{ComputationType, RefinedType, ValueType};
use fmt_util::comma_seq;
use std::fmt;
use str_util::Name;

impl fmt::Display for RefinedType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.handle.fmt(f)
  }
}

impl fmt::Display for ValueType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValueType::Sum(entries) => {
        f.write_str("∑(")?;
        comma_seq(f, entries.iter().map(|(name, ty)| EntryDisplay { name, ty }))?;
        f.write_str(")")
      }
      ValueType::Record(fields) => {
        f.write_str("record {")?;
        comma_seq(f, fields.iter().map(|(name, ty)| EntryDisplay { name, ty }))?;
        f.write_str("}")
      }
      ValueType::Variant(tag, fields) => {
        write!(f, "variant[{tag}] {{")?;
        comma_seq(f, fields.iter().map(|(name, ty)| EntryDisplay { name, ty }))?;
        f.write_str("}")
      }
      ValueType::Thunk(body) => write!(f, "thunk({body})"),
      ValueType::Recursive(name, body) => write!(f, "μ{name}. ({body})"),
      ValueType::Variable(name) => name.fmt(f),
      ValueType::TyAbsV(name, body) => write!(f, "forall {name}. ({body})"),
      ValueType::TyAppV(func, arg) => write!(f, "({func})[{arg}]"),
    }
  }
}

impl fmt::Display for ComputationType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ComputationType::Produce(value, effects) => {
        write!(f, "produce({value}")?;
        if !effects.is_empty() {
          f.write_str(", ")?;
          comma_seq(f, effects.iter().map(|(name, ty)| EntryDisplay { name, ty }))?;
        }
        f.write_str(")")
      }
      ComputationType::With(bundle) => {
        f.write_str("with(")?;
        comma_seq(f, bundle.iter().map(|(name, ty)| EntryDisplay { name, ty }))?;
        f.write_str(")")
      }
      ComputationType::Arrow(param, body) => write!(f, "({param}) -> ({body})"),
      ComputationType::Variable(name) => name.fmt(f),
    }
  }
}

struct EntryDisplay<'a, T> {
  name: &'a Name,
  ty: &'a T,
}

impl<T> fmt::Display for EntryDisplay<'_, T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.name, self.ty)
  }
}
