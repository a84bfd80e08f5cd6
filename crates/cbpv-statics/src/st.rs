//! See [`St`].

use crate::error::Error;
use cbpv_ty::unify::{Bound, Occurs};
use cbpv_ty::{ComputationType, NameSupply, ProofObligations, RefinedType};
use config::Cfg;

/// The mutable state, shared by every scope of one check.
///
/// This owns the one solution store, so whatever a unification in one branch solves is visible to
/// every later branch.
#[derive(Debug)]
pub struct St {
  obligations: ProofObligations,
  names: NameSupply,
  cfg: Cfg,
}

impl St {
  /// Returns a new state with a fresh name supply.
  #[must_use]
  pub fn new(cfg: Cfg) -> Self {
    Self::with_names(cfg, NameSupply::new())
  }

  /// Returns a new state that continues from the given name supply, e.g. the one the parser used.
  #[must_use]
  pub fn with_names(cfg: Cfg, names: NameSupply) -> Self {
    let occurs = if cfg.occurs_check { Occurs::Check } else { Occurs::Skip };
    Self { obligations: ProofObligations::new(occurs), names, cfg }
  }

  /// Returns the config.
  #[must_use]
  pub fn cfg(&self) -> Cfg {
    self.cfg
  }

  /// Returns the name supply.
  pub fn names(&mut self) -> &mut NameSupply {
    &mut self.names
  }

  /// Returns the solutions so far.
  #[must_use]
  pub fn obligations(&self) -> &ProofObligations {
    &self.obligations
  }

  /// Unifies what was wanted with what was found.
  ///
  /// # Errors
  ///
  /// If they could not be unified.
  pub fn unify_v(&mut self, want: &RefinedType, got: &RefinedType) -> Result<(), Error> {
    self.obligations.unify_v(want, got, &Bound::default())?;
    Ok(())
  }

  /// Unifies what was wanted with what was found.
  ///
  /// # Errors
  ///
  /// If they could not be unified.
  pub fn unify_c(&mut self, want: &ComputationType, got: &ComputationType) -> Result<(), Error> {
    self.obligations.unify_c(want, got, &Bound::default())?;
    Ok(())
  }

  /// Dereferences a solved variable one step.
  #[must_use]
  pub fn apply_v(&self, ty: &RefinedType) -> RefinedType {
    self.obligations.apply_v(ty)
  }

  /// Dereferences a solved variable one step.
  #[must_use]
  pub fn apply_c(&self, ty: &ComputationType) -> ComputationType {
    self.obligations.apply_c(ty)
  }
}

impl Default for St {
  fn default() -> Self {
    Self::new(Cfg::default())
  }
}
