//! See [`Typer`].

use crate::error::{Error, ErrorKind};
use cbpv_ty::RefinedType;
use fast_hash::FxHashMap;
use str_util::Name;

/// One lexical scope of the checker.
///
/// Scopes form a chain through their parents. Looking a variable up walks outward. The solution
/// store is not per scope, it lives in the [`crate::St`] passed to every rule.
#[derive(Debug, Default)]
pub struct Typer<'a> {
  parent: Option<&'a Typer<'a>>,
  vars: FxHashMap<Name, RefinedType>,
}

impl Typer<'_> {
  /// Returns a scope with no parent and no variables.
  #[must_use]
  pub fn root() -> Self {
    Self::default()
  }

  /// Returns an empty scope whose parent is this.
  #[must_use]
  pub fn subscope(&self) -> Typer<'_> {
    Typer { parent: Some(self), vars: FxHashMap::default() }
  }

  /// Binds `name` to `ty` in this scope.
  ///
  /// # Errors
  ///
  /// If `name` was already bound in this scope. Shadowing a name from an outer scope is fine.
  pub fn with_v(&mut self, name: Name, ty: RefinedType) -> Result<(), Error> {
    if self.vars.contains_key(&name) {
      return Err(ErrorKind::NameConflict(name).into());
    }
    log::trace!("bind {name}: {ty}");
    self.vars.insert(name, ty);
    Ok(())
  }

  /// Returns the type of `name` from the innermost scope that binds it.
  ///
  /// # Errors
  ///
  /// If no scope binds it.
  pub fn resolve_v(&self, name: &Name) -> Result<&RefinedType, Error> {
    let mut cur = Some(self);
    while let Some(scope) = cur {
      if let Some(ty) = scope.vars.get(name) {
        return Ok(ty);
      }
      cur = scope.parent;
    }
    Err(ErrorKind::UnknownVariable(name.clone()).into())
  }
}
