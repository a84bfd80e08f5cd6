//! Configuration stored in a config file.

use crate::{Cfg, DiagnosticLines};
use serde::Deserialize;
use std::fmt;

/// The name of the config file.
pub const NAME: &str = "cbpv.toml";

/// The root config.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Root {
  /// The version. Should be 1.
  pub version: u16,
  /// The checking config.
  #[serde(default)]
  pub check: Check,
  /// The diagnostics config.
  #[serde(default)]
  pub diagnostics: Diagnostics,
}

/// The checking config.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Check {
  /// Whether to do the occurs check. Defaults to on.
  pub occurs_check: Option<bool>,
}

/// The diagnostics config.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Diagnostics {
  /// How many lines a message may have.
  pub lines: Option<Lines>,
}

/// How many lines a message may have.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lines {
  /// Only one.
  One,
  /// Any number.
  Many,
}

impl From<Lines> for DiagnosticLines {
  fn from(val: Lines) -> Self {
    match val {
      Lines::One => DiagnosticLines::One,
      Lines::Many => DiagnosticLines::Many,
    }
  }
}

/// An error when reading the config file.
#[derive(Debug)]
pub enum Error {
  /// It was not valid TOML, or did not have the right shape.
  Parse(toml::de::Error),
  /// It had a version other than 1.
  Version(u16),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Parse(e) => write!(f, "couldn't parse config: {e}"),
      Error::Version(n) => write!(f, "invalid config version: expected 1, found {n}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Parse(e) => Some(e),
      Error::Version(_) => None,
    }
  }
}

/// Parses the contents of a config file. Settings not in the file keep their defaults.
///
/// # Errors
///
/// If the contents were not a valid config.
pub fn parse(contents: &str) -> Result<Cfg, Error> {
  let root: Root = toml::from_str(contents).map_err(Error::Parse)?;
  if root.version != 1 {
    return Err(Error::Version(root.version));
  }
  let mut ret = Cfg::default();
  if let Some(occurs_check) = root.check.occurs_check {
    ret.occurs_check = occurs_check;
  }
  if let Some(lines) = root.diagnostics.lines {
    ret.lines = lines.into();
  }
  Ok(ret)
}
