use super::msgs::{
    ERR_FN_ARGS, ERR_FN_ASYNC, ERR_FN_GENERICS, ERR_FN_NO_RETURN, ERR_FN_UNSAFE,
};
use syn::{GenericArgument, PathArguments, Signature, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetCase {
    /// T
    Value,
    /// Arc<T>
    Shared,
    /// Result<T, E>
    ResultValue,
    /// Result<Arc<T>, E>
    ResultShared,
}

pub struct RetSpec {
    pub capability: Type,
    pub case: RetCase,
}

pub fn check_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(a) = &sig.asyncness {
        return Err(syn::Error::new_spanned(a, ERR_FN_ASYNC));
    }
    // 生成的构造器在安全上下文中调用目标函数
    if let Some(u) = &sig.unsafety {
        return Err(syn::Error::new_spanned(u, ERR_FN_UNSAFE));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(&sig.generics, ERR_FN_GENERICS));
    }
    if !sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(&sig.inputs, ERR_FN_ARGS));
    }
    Ok(())
}

// 取路径类型最后一段为 `wrapper` 时的第一个类型实参
fn first_type_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(tp) = ty else {
        return None;
    };
    let seg = tp.path.segments.last()?;
    if seg.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(ab) = &seg.arguments else {
        return None;
    };
    ab.args.iter().find_map(|a| match a {
        GenericArgument::Type(t) => Some(t),
        _ => None,
    })
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(t) if t.elems.is_empty())
}

pub fn analyze_return(sig: &Signature) -> syn::Result<RetSpec> {
    let ty = match &sig.output {
        syn::ReturnType::Default => {
            return Err(syn::Error::new_spanned(&sig.ident, ERR_FN_NO_RETURN))
        }
        syn::ReturnType::Type(_, ty) => &**ty,
    };
    let (ok_ty, fallible) = match first_type_arg(ty, "Result") {
        Some(inner) => (inner, true),
        None => (ty, false),
    };
    if is_unit(ok_ty) {
        return Err(syn::Error::new_spanned(ty, ERR_FN_NO_RETURN));
    }
    let (capability, shared) = match first_type_arg(ok_ty, "Arc") {
        Some(inner) => (inner.clone(), true),
        None => (ok_ty.clone(), false),
    };
    let case = match (fallible, shared) {
        (false, false) => RetCase::Value,
        (false, true) => RetCase::Shared,
        (true, false) => RetCase::ResultValue,
        (true, true) => RetCase::ResultShared,
    };
    Ok(RetSpec { capability, case })
}
