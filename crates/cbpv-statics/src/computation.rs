//! Checking and inferring computations.

use crate::error::{Error, ErrorKind};
use crate::scope::Typer;
use crate::st::St;
use cbpv_term::{
  Branch, Computation, ComputationKind, Typed, TypedComputation, Untyped, UntypedComputation,
  UntypedValue,
};
use cbpv_ty::{ComputationType, RefinedType, Row, ValueType};
use str_util::Name;

impl Typer<'_> {
  /// Infers the type of a computation.
  ///
  /// # Errors
  ///
  /// If the computation is ill-typed or cannot be inferred.
  pub fn infer_c(
    &self,
    st: &mut St,
    comp: &UntypedComputation,
  ) -> Result<TypedComputation, Error> {
    log::trace!("infer_c {comp}");
    let (kind, ty) = match &comp.kind {
      ComputationKind::Annotate(target, ty) => {
        let target = self.check_c(st, target, ty)?;
        (ComputationKind::Annotate(Box::new(target), ty.clone()), ty.clone())
      }
      ComputationKind::Sequence(left, name, right) => {
        let left = self.infer_c(st, left)?;
        let ComputationType::Produce(produced, _) = st.apply_c(left.ty()) else {
          return Err(ErrorKind::SequenceOnWrongType(st.apply_c(left.ty())).into());
        };
        let mut sub = self.subscope();
        sub.with_v(name.clone(), produced)?;
        let right = sub.infer_c(st, right)?;
        let ty = right.ty().clone();
        (ComputationKind::Sequence(Box::new(left), name.clone(), Box::new(right)), ty)
      }
      ComputationKind::Projection(value, key) => {
        let value = self.infer_v(st, value)?;
        let field = project(&st.apply_v(value.ty()), key)?;
        (ComputationKind::Projection(Box::new(value), key.clone()), field.comput())
      }
      ComputationKind::Match(value, branches) => return self.infer_match(st, value, branches),
      ComputationKind::Apply(func, arg) => {
        let func = self.infer_c(st, func)?;
        let ComputationType::Arrow(param, ret) = st.apply_c(func.ty()) else {
          return Err(ErrorKind::ApplyOnWrongType(st.apply_c(func.ty())).into());
        };
        let arg = self.check_v(st, arg, &param)?;
        (ComputationKind::Apply(Box::new(func), Box::new(arg)), *ret)
      }
      ComputationKind::Resolve(bundle, tag) => {
        let bundle = self.infer_c(st, bundle)?;
        let ComputationType::With(members) = st.apply_c(bundle.ty()) else {
          return Err(ErrorKind::ResolveOnWrongType(st.apply_c(bundle.ty())).into());
        };
        let Some(member) = members.get(tag) else {
          return Err(ErrorKind::ResolveMissingTag(tag.clone()).into());
        };
        (ComputationKind::Resolve(Box::new(bundle), tag.clone()), member.clone())
      }
      ComputationKind::Force(value) => {
        let value = self.infer_v(st, value)?;
        let ty = st.apply_v(value.ty());
        let ValueType::Thunk(body) = &ty.handle else {
          return Err(ErrorKind::ForceOnWrongType(ty).into());
        };
        let ret = body.as_ref().clone();
        (ComputationKind::Force(Box::new(value)), ret)
      }
      ComputationKind::TyAppV(value, arg) => {
        let value = self.infer_v(st, value)?;
        let ty = st.apply_v(value.ty());
        let ValueType::TyAbsV(name, body) = &ty.handle else {
          return Err(ErrorKind::TyAppOnWrongType(ty).into());
        };
        let ret = body.substitute_v(name, arg).comput();
        (ComputationKind::TyAppV(Box::new(value), arg.clone()), ret)
      }
      ComputationKind::Def(name, bound, ty, body) => {
        let mut sub = self.subscope();
        sub.with_v(name.clone(), ty.clone().thunk())?;
        let bound = sub.check_c(st, bound, ty)?;
        let body = sub.infer_c(st, body)?;
        let ret = body.ty().clone();
        (ComputationKind::Def(name.clone(), Box::new(bound), ty.clone(), Box::new(body)), ret)
      }
      ComputationKind::Produce(_)
      | ComputationKind::Lambda(_, _)
      | ComputationKind::With(_)
      | ComputationKind::TyAppC(_, _) => {
        return Err(ErrorKind::ComputationInferenceFailure(Box::new(comp.clone())).into());
      }
    };
    Ok(Computation::new(kind, ty))
  }

  /// Checks a computation against a type.
  ///
  /// # Errors
  ///
  /// If the computation does not have the type.
  pub fn check_c(
    &self,
    st: &mut St,
    comp: &UntypedComputation,
    ty: &ComputationType,
  ) -> Result<TypedComputation, Error> {
    let ty = st.apply_c(ty);
    log::trace!("check_c {comp} against {ty}");
    let kind = match (&comp.kind, &ty) {
      (ComputationKind::Lambda(name, body), ComputationType::Arrow(param, body_ty)) => {
        let mut sub = self.subscope();
        sub.with_v(name.clone(), param.clone())?;
        let body = sub.check_c(st, body, body_ty)?;
        ComputationKind::Lambda(name.clone(), Box::new(body))
      }
      (ComputationKind::Produce(value), ComputationType::Produce(handle, _)) => {
        let value = self.check_v(st, value, handle)?;
        ComputationKind::Produce(Box::new(value))
      }
      (ComputationKind::With(members), ComputationType::With(member_tys)) => {
        if let Some(key) = member_tys.keys().find(|&key| !members.contains_key(key)) {
          return Err(ErrorKind::WithMissingKey(key.clone()).into());
        }
        let mut checked = Row::new();
        for (key, member) in members {
          let Some(want) = member_tys.get(key) else {
            return Err(ErrorKind::WithExtraKey(key.clone()).into());
          };
          checked.insert(key.clone(), self.check_c(st, member, want)?);
        }
        ComputationKind::With(checked)
      }
      _ => {
        let inferred = self.infer_c(st, comp)?;
        st.unify_c(&ty, inferred.ty())?;
        return Ok(inferred);
      }
    };
    Ok(Computation::new(kind, ty))
  }

  /// The branches are inferred in tag order, each unified against one fresh result type, so what
  /// one branch solves constrains the later ones.
  fn infer_match(
    &self,
    st: &mut St,
    value: &UntypedValue,
    branches: &Row<Branch<Untyped>>,
  ) -> Result<TypedComputation, Error> {
    let value = self.infer_v(st, value)?;
    let ty = st.apply_v(value.ty());
    let ValueType::Sum(entries) = &ty.handle else {
      return Err(ErrorKind::MatchOnWrongType(ty).into());
    };
    if let Some(tag) = branches.keys().find(|&tag| !entries.contains_key(tag)) {
      return Err(ErrorKind::SumMissingTag(tag.clone()).into());
    }
    if let Some(tag) = entries.keys().find(|&tag| !branches.contains_key(tag)) {
      return Err(ErrorKind::MatchMissingBranch(tag.clone()).into());
    }
    if branches.is_empty() {
      let kind = ComputationKind::Match(Box::new(value), Row::new());
      return Ok(Computation::new(kind, RefinedType::bottom().comput()));
    }
    let ret = st.names().fresh_c();
    let mut typed = Row::<Branch<Typed>>::new();
    // same keys, so this lines every branch up with its arm.
    for ((tag, branch), payload) in branches.iter().zip(entries.values()) {
      let mut sub = self.subscope();
      sub.with_v(branch.binder.clone(), payload.clone())?;
      let body = sub.infer_c(st, &branch.body)?;
      st.unify_c(&ret, body.ty())?;
      typed.insert(tag.clone(), Branch { binder: branch.binder.clone(), body });
    }
    let ret = st.obligations().resolve_c(&ret);
    Ok(Computation::new(ComputationKind::Match(Box::new(value), typed), ret))
  }
}

fn project(ty: &RefinedType, key: &Name) -> Result<RefinedType, Error> {
  let kind = match &ty.handle {
    ValueType::Record(fields) => match fields.get(key) {
      Some(field) => return Ok(field.clone()),
      None => ErrorKind::RecordMissingKey(key.clone()),
    },
    ValueType::Variant(_, fields) => match fields.get(key) {
      Some(field) => return Ok(field.clone()),
      None => ErrorKind::VariantMissingKey(key.clone()),
    },
    _ => ErrorKind::ProjectionOnWrongType(ty.clone()),
  };
  Err(kind.into())
}
