//! Checking and inferring values.

use crate::error::{Error, ErrorKind};
use crate::scope::Typer;
use crate::st::St;
use cbpv_term::{TypedValue, UntypedValue, Value, ValueKind};
use cbpv_ty::{RefinedType, Row, ValueType};
use str_util::Name;

impl Typer<'_> {
  /// Infers the type of a value.
  ///
  /// Only annotations, variables, and unrolls infer. Everything else must be checked against a
  /// type.
  ///
  /// # Errors
  ///
  /// If the value is ill-typed or cannot be inferred.
  pub fn infer_v(&self, st: &mut St, value: &UntypedValue) -> Result<TypedValue, Error> {
    log::trace!("infer_v {value}");
    match &value.kind {
      ValueKind::Annotate(target, ty) => {
        let target = self.check_v(st, target, ty)?;
        Ok(Value::new(ValueKind::Annotate(Box::new(target), ty.clone()), ty.clone()))
      }
      ValueKind::Variable(name) => {
        let ty = self.resolve_v(name)?.clone();
        Ok(Value::new(ValueKind::Variable(name.clone()), ty))
      }
      ValueKind::Unroll(inner) => {
        let inner = self.infer_v(st, inner)?;
        let ty = st.apply_v(inner.ty());
        if !matches!(ty.handle, ValueType::Recursive(_, _)) {
          return Err(ErrorKind::UnrollOnWrongType(ty).into());
        }
        Ok(Value::new(ValueKind::Unroll(Box::new(inner)), ty.unroll()))
      }
      ValueKind::Roll(_)
      | ValueKind::Injection(_, _)
      | ValueKind::Thunk(_)
      | ValueKind::TyAbsV(_, _)
      | ValueKind::Record(_)
      | ValueKind::Variant(_, _) => {
        Err(ErrorKind::ValueInferenceFailure(Box::new(value.clone())).into())
      }
    }
  }

  /// Checks a value against a type.
  ///
  /// Where the shapes of the value and the type match, this checks the parts. Otherwise it infers
  /// and unifies the inferred type with `ty`.
  ///
  /// # Errors
  ///
  /// If the value does not have the type.
  pub fn check_v(
    &self,
    st: &mut St,
    value: &UntypedValue,
    ty: &RefinedType,
  ) -> Result<TypedValue, Error> {
    let ty = st.apply_v(ty);
    log::trace!("check_v {value} against {ty}");
    let kind = match (&value.kind, &ty.handle) {
      (ValueKind::Record(fields), ValueType::Record(field_tys)) => {
        let fields = self.check_fields(st, fields, field_tys, Fields::Record)?;
        ValueKind::Record(fields)
      }
      (ValueKind::Variant(tag, fields), ValueType::Variant(want_tag, field_tys)) => {
        if tag != want_tag {
          return Err(ErrorKind::VariantTagMismatch(want_tag.clone(), tag.clone()).into());
        }
        let fields = self.check_fields(st, fields, field_tys, Fields::Variant)?;
        ValueKind::Variant(tag.clone(), fields)
      }
      (ValueKind::Roll(inner), ValueType::Recursive(_, _)) => {
        let inner = self.check_v(st, inner, &ty.unroll())?;
        ValueKind::Roll(Box::new(inner))
      }
      (ValueKind::Injection(tag, inner), ValueType::Sum(entries)) => {
        let Some(want) = entries.get(tag) else {
          return Err(ErrorKind::SumMissingTag(tag.clone()).into());
        };
        let inner = self.check_v(st, inner, want)?;
        ValueKind::Injection(tag.clone(), Box::new(inner))
      }
      (ValueKind::Thunk(body), ValueType::Thunk(body_ty)) => {
        let body = self.check_c(st, body, body_ty)?;
        ValueKind::Thunk(Box::new(body))
      }
      (ValueKind::TyAbsV(name, body), ValueType::TyAbsV(ty_name, body_ty)) => {
        // line the type's binder up with the value's, instead of renaming the value.
        let body_ty = body_ty.substitute_v(ty_name, &ValueType::Variable(name.clone()).into());
        let body = self.subscope().check_v(st, body, &body_ty)?;
        ValueKind::TyAbsV(name.clone(), Box::new(body))
      }
      _ => {
        let inferred = self.infer_v(st, value)?;
        st.unify_v(&ty, inferred.ty())?;
        return Ok(inferred);
      }
    };
    Ok(Value::new(kind, ty))
  }

  fn check_fields(
    &self,
    st: &mut St,
    fields: &Row<UntypedValue>,
    field_tys: &Row<RefinedType>,
    flavor: Fields,
  ) -> Result<Row<TypedValue>, Error> {
    if let Some(key) = field_tys.keys().find(|&key| !fields.contains_key(key)) {
      return Err(flavor.missing(key.clone()).into());
    }
    let mut ret = Row::new();
    for (key, field) in fields {
      let Some(want) = field_tys.get(key) else {
        return Err(flavor.extra(key.clone()).into());
      };
      let field = self.check_v(st, field, want)?;
      ret.insert(key.clone(), field);
    }
    Ok(ret)
  }
}

/// Which kind of value has the fields, for errors.
#[derive(Debug, Clone, Copy)]
enum Fields {
  Record,
  Variant,
}

impl Fields {
  fn missing(self, key: Name) -> ErrorKind {
    match self {
      Fields::Record => ErrorKind::RecordMissingKey(key),
      Fields::Variant => ErrorKind::VariantMissingKey(key),
    }
  }

  fn extra(self, key: Name) -> ErrorKind {
    match self {
      Fields::Record => ErrorKind::RecordExtraKey(key),
      Fields::Variant => ErrorKind::VariantExtraKey(key),
    }
  }
}
