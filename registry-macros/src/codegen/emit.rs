use quote::{format_ident, quote};
use syn::{ItemFn, LitStr};

use super::analyze::{RetCase, RetSpec};
use super::parse::ComponentArgs;

// 生成：原函数 + 擦除构造器 + inventory 声明
pub fn emit_component(
    item: &ItemFn,
    args: &ComponentArgs,
    ret: &RetSpec,
) -> proc_macro2::TokenStream {
    let ident = &item.sig.ident;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let primary = args.primary;
    let cap = &ret.capability;
    let construct_ident = format_ident!("__construct_{}", ident);
    let call = quote! { #ident() };
    let into_anyhow = quote! {
        .map_err(::core::convert::Into::<mmg_registry::anyhow::Error>::into)?
    };
    let shared = match ret.case {
        RetCase::Value => quote! { ::std::sync::Arc::new(#call) },
        RetCase::Shared => quote! { #call },
        RetCase::ResultValue => quote! { ::std::sync::Arc::new(#call #into_anyhow) },
        RetCase::ResultShared => quote! { #call #into_anyhow },
    };
    quote! {
        #item
        #[doc(hidden)]
        const _: () = {
            fn #construct_ident()
                -> mmg_registry::anyhow::Result<mmg_registry::definition::Instance> {
                let __shared: ::std::sync::Arc<#cap> = #shared;
                let __instance = mmg_registry::definition::Instance::new::<#cap>(__shared);
                ::core::result::Result::Ok(__instance)
            }
            mmg_registry::inventory::submit! {
                mmg_registry::declare::Declaration {
                    name: #name,
                    primary: #primary,
                    capability: mmg_registry::capability::CapabilityId::of::<#cap>,
                    construct: #construct_ident,
                }
            }
        };
    }
}
