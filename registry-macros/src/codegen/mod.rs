mod analyze;
mod emit;
mod msgs;
mod parse;

use proc_macro::TokenStream;
use syn::Item;

use analyze::{analyze_return, check_signature};
use emit::emit_component;
use msgs::ERR_COMPONENT_TARGET;
use parse::parse_component_args;

pub fn entrypoint(args: TokenStream, input: TokenStream) -> TokenStream {
    expand(args.into(), input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(
    args: proc_macro2::TokenStream,
    input: proc_macro2::TokenStream,
) -> syn::Result<proc_macro2::TokenStream> {
    let func = match syn::parse2::<Item>(input)? {
        Item::Fn(func) => func,
        other => return Err(syn::Error::new_spanned(other, ERR_COMPONENT_TARGET)),
    };
    let args = parse_component_args(args)?;
    check_signature(&func.sig)?;
    let ret = analyze_return(&func.sig)?;
    Ok(emit_component(&func, &args, &ret))
}
