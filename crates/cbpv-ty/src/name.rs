//! See [`NameSupply`].

use crate::ty::{ComputationType, RefinedType, ValueType};
use str_util::Name;

/// A supply of fresh names.
///
/// Every name handed out by one supply is distinct from every other name it hands out. The names
/// contain a `#`, which no identifier in source syntax can, so they also never collide with user
/// names.
///
/// The parser and the statics should share one supply for a whole program, since substitution
/// relies on binders never colliding.
#[derive(Debug, Default, Clone)]
pub struct NameSupply {
  next: u32,
}

impl NameSupply {
  /// Returns a new supply, starting from zero.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a fresh name like `#7`.
  pub fn fresh(&mut self) -> Name {
    let ret = Name::new(format!("#{}", self.next));
    self.next += 1;
    ret
  }

  /// Returns a fresh name like `x#7`, keeping the hint for readability.
  pub fn fresh_from(&mut self, hint: &str) -> Name {
    let ret = Name::new(format!("{hint}#{}", self.next));
    self.next += 1;
    ret
  }

  /// Returns a fresh value type variable.
  pub fn fresh_v(&mut self) -> RefinedType {
    ValueType::Variable(self.fresh()).into()
  }

  /// Returns a fresh computation type variable.
  pub fn fresh_c(&mut self) -> ComputationType {
    ComputationType::Variable(self.fresh())
  }

  /// Returns how many names have been handed out.
  #[must_use]
  pub fn count(&self) -> u32 {
    self.next
  }
}
