//! Errors.

use cbpv_term::{UntypedComputation, UntypedValue};
use cbpv_ty::{ComputationType, RefinedType, unify};
use config::DiagnosticLines;
use diagnostic::{Code, Severity};
use std::fmt;
use str_util::Name;

#[derive(Debug, Clone)]
pub(crate) enum ErrorKind {
  UnknownVariable(Name),
  NameConflict(Name),
  ValueInferenceFailure(Box<UntypedValue>),
  ComputationInferenceFailure(Box<UntypedComputation>),
  UnrollOnWrongType(RefinedType),
  RecordMissingKey(Name),
  RecordExtraKey(Name),
  VariantMissingKey(Name),
  VariantExtraKey(Name),
  /// The tag of the type, then the tag of the value.
  VariantTagMismatch(Name, Name),
  SumMissingTag(Name),
  WithMissingKey(Name),
  WithExtraKey(Name),
  ResolveMissingTag(Name),
  SequenceOnWrongType(ComputationType),
  ProjectionOnWrongType(RefinedType),
  MatchOnWrongType(RefinedType),
  MatchMissingBranch(Name),
  ApplyOnWrongType(ComputationType),
  ResolveOnWrongType(ComputationType),
  ForceOnWrongType(RefinedType),
  TyAppOnWrongType(RefinedType),
  Unify(unify::Error),
}

struct ErrorKindDisplay<'a> {
  kind: &'a ErrorKind,
  lines: DiagnosticLines,
}

impl fmt::Display for ErrorKindDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      ErrorKind::UnknownVariable(name) => write!(f, "undefined variable: {name}"),
      ErrorKind::NameConflict(name) => write!(f, "duplicate variable in one scope: {name}"),
      ErrorKind::ValueInferenceFailure(value) => {
        write!(f, "cannot infer the type of this value, annotate it: {value}")
      }
      ErrorKind::ComputationInferenceFailure(comp) => {
        write!(f, "cannot infer the type of this computation, annotate it: {comp}")
      }
      ErrorKind::UnrollOnWrongType(ty) => {
        write!(f, "cannot unroll a value of non-recursive type: {ty}")
      }
      ErrorKind::RecordMissingKey(key) => write!(f, "missing record field: {key}"),
      ErrorKind::RecordExtraKey(key) => write!(f, "extra record field: {key}"),
      ErrorKind::VariantMissingKey(key) => write!(f, "missing variant field: {key}"),
      ErrorKind::VariantExtraKey(key) => write!(f, "extra variant field: {key}"),
      ErrorKind::VariantTagMismatch(want, got) => {
        write!(f, "mismatched variant tags: expected {want}, found {got}")
      }
      ErrorKind::SumMissingTag(tag) => write!(f, "tag not in sum type: {tag}"),
      ErrorKind::WithMissingKey(key) => write!(f, "missing bundle member: {key}"),
      ErrorKind::WithExtraKey(key) => write!(f, "extra bundle member: {key}"),
      ErrorKind::ResolveMissingTag(tag) => write!(f, "no such bundle member: {tag}"),
      ErrorKind::SequenceOnWrongType(ty) => {
        write!(f, "cannot sequence a computation that does not produce: {ty}")
      }
      ErrorKind::ProjectionOnWrongType(ty) => {
        write!(f, "cannot project a field out of a value of type {ty}")
      }
      ErrorKind::MatchOnWrongType(ty) => write!(f, "cannot match on a value of non-sum type: {ty}"),
      ErrorKind::MatchMissingBranch(tag) => write!(f, "missing match branch: {tag}"),
      ErrorKind::ApplyOnWrongType(ty) => write!(f, "cannot apply a non-function: {ty}"),
      ErrorKind::ResolveOnWrongType(ty) => {
        write!(f, "cannot resolve a member of a non-bundle: {ty}")
      }
      ErrorKind::ForceOnWrongType(ty) => write!(f, "cannot force a non-thunk: {ty}"),
      ErrorKind::TyAppOnWrongType(ty) => {
        write!(f, "cannot instantiate a value of non-quantified type: {ty}")
      }
      ErrorKind::Unify(e) => match e {
        unify::Error::Value(want, got) => {
          f.write_str("incompatible value types")?;
          expected_found(f, self.lines, want, got)
        }
        unify::Error::Computation(want, got) => {
          f.write_str("incompatible computation types")?;
          expected_found(f, self.lines, want, got)
        }
        unify::Error::ValueCircularity(name, ty) => {
          write!(f, "circular type: {name} occurs in {ty}")
        }
        unify::Error::ComputationCircularity(name, ty) => {
          write!(f, "circular type: {name} occurs in {ty}")
        }
      },
    }
  }
}

fn expected_found<T>(
  f: &mut fmt::Formatter<'_>,
  lines: DiagnosticLines,
  want: &T,
  got: &T,
) -> fmt::Result
where
  T: fmt::Display,
{
  match lines {
    DiagnosticLines::One => write!(f, ": expected {want}, found {got}"),
    DiagnosticLines::Many => {
      writeln!(f, "\n  expected {want}")?;
      write!(f, "     found {got}")
    }
  }
}

/// A statics error.
#[derive(Debug, Clone)]
pub struct Error {
  kind: ErrorKind,
}

impl Error {
  pub(crate) fn new(kind: ErrorKind) -> Self {
    Self { kind }
  }

  /// Returns a value that displays the message.
  #[must_use]
  pub fn display(&self, lines: DiagnosticLines) -> impl fmt::Display + '_ {
    ErrorKindDisplay { kind: &self.kind, lines }
  }

  /// Returns whether this is a failure to unify, rather than a failure of a typing rule.
  #[must_use]
  pub fn is_unify(&self) -> bool {
    matches!(self.kind, ErrorKind::Unify(_))
  }

  /// Returns the code for this.
  #[must_use]
  pub fn code(&self) -> Code {
    match self.kind {
      ErrorKind::UnknownVariable(_) => Code::n(6001),
      ErrorKind::NameConflict(_) => Code::n(6002),
      ErrorKind::ValueInferenceFailure(_) => Code::n(6003),
      ErrorKind::ComputationInferenceFailure(_) => Code::n(6004),
      ErrorKind::UnrollOnWrongType(_) => Code::n(6005),
      ErrorKind::RecordMissingKey(_) => Code::n(6006),
      ErrorKind::RecordExtraKey(_) => Code::n(6007),
      ErrorKind::VariantMissingKey(_) => Code::n(6008),
      ErrorKind::VariantExtraKey(_) => Code::n(6009),
      ErrorKind::VariantTagMismatch(_, _) => Code::n(6010),
      ErrorKind::SumMissingTag(_) => Code::n(6011),
      ErrorKind::WithMissingKey(_) => Code::n(6012),
      ErrorKind::WithExtraKey(_) => Code::n(6013),
      ErrorKind::ResolveMissingTag(_) => Code::n(6014),
      ErrorKind::SequenceOnWrongType(_) => Code::n(6015),
      ErrorKind::ProjectionOnWrongType(_) => Code::n(6016),
      ErrorKind::MatchOnWrongType(_) => Code::n(6017),
      ErrorKind::MatchMissingBranch(_) => Code::n(6018),
      ErrorKind::ApplyOnWrongType(_) => Code::n(6019),
      ErrorKind::ResolveOnWrongType(_) => Code::n(6020),
      ErrorKind::ForceOnWrongType(_) => Code::n(6021),
      ErrorKind::TyAppOnWrongType(_) => Code::n(6022),
      ErrorKind::Unify(unify::Error::Value(_, _)) => Code::n(6023),
      ErrorKind::Unify(unify::Error::Computation(_, _)) => Code::n(6024),
      ErrorKind::Unify(unify::Error::ValueCircularity(_, _)) => Code::n(6025),
      ErrorKind::Unify(unify::Error::ComputationCircularity(_, _)) => Code::n(6026),
    }
  }

  /// Returns the severity for this.
  #[must_use]
  pub fn severity(&self) -> Severity {
    Severity::Error
  }
}

impl From<ErrorKind> for Error {
  fn from(kind: ErrorKind) -> Self {
    Self::new(kind)
  }
}

impl From<unify::Error> for Error {
  fn from(val: unify::Error) -> Self {
    Self::new(ErrorKind::Unify(val))
  }
}
