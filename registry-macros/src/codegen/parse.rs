use super::msgs::{ERR_NAME_DUP, ERR_NAME_EMPTY, ERR_PRIMARY_DUP, ERR_UNKNOWN_ARG};
use syn::{parse::Parser, LitBool, LitStr, Token};

// 低层解析：#[component(name = "...", primary)] 参数

#[derive(Default)]
pub struct ComponentArgs {
    pub name: Option<LitStr>,
    pub primary: bool,
}

pub fn parse_component_args(args: proc_macro2::TokenStream) -> syn::Result<ComponentArgs> {
    let mut name: Option<LitStr> = None;
    let mut primary: Option<bool> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            if name.is_some() {
                return Err(meta.error(ERR_NAME_DUP));
            }
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().trim().is_empty() {
                return Err(syn::Error::new_spanned(&lit, ERR_NAME_EMPTY));
            }
            name = Some(lit);
            Ok(())
        } else if meta.path.is_ident("primary") {
            if primary.is_some() {
                return Err(meta.error(ERR_PRIMARY_DUP));
            }
            // 允许 `primary` 或 `primary = false`
            let flag = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitBool>()?.value
            } else {
                true
            };
            primary = Some(flag);
            Ok(())
        } else {
            Err(meta.error(ERR_UNKNOWN_ARG))
        }
    });
    parser.parse2(args)?;
    Ok(ComponentArgs {
        name,
        primary: primary.unwrap_or(false),
    })
}
