//! Configuration.

#![allow(clippy::module_name_repetitions)]

pub mod file;

/// How many lines a diagnostic message may have.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLines {
  /// Error messages may not have newlines.
  #[default]
  One,
  /// Error messages may (or may not) have newlines.
  Many,
}

/// Options for checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cfg {
  /// Whether to reject solving a type variable to a type that contains it.
  pub occurs_check: bool,
  /// How to render diagnostics.
  pub lines: DiagnosticLines,
}

impl Default for Cfg {
  fn default() -> Self {
    Self { occurs_check: true, lines: DiagnosticLines::default() }
  }
}
