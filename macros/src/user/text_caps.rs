//! `#[derive(TextCaps)]`
//!
//! Non-generic types check `Display` directly. Generic types cannot be
//! inspected through their parameters, so they declare it:
//!
//! | Attribute | `Native` |
//! |-----------|----------|
//! | none | `Absent` (`Debug` path) |
//! | `#[text_caps(display)]` | `Present` for every instantiation |
//! | `#[text_caps(display(T, U))]` | `Present` when `T` and `U` are |

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::common::{and_chain, caps_paths, is_generic, lift_check};

/// What `#[text_caps(..)]` says about the `Display` impl.
enum Display {
    Missing,
    Always,
    /// Conditional on these parameters being `Display`.
    When(Vec<syn::Path>),
}

fn parse_display(attrs: &[syn::Attribute]) -> syn::Result<Display> {
    let mut display = Display::Missing;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("text_caps")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("display") {
                return Err(meta.error("expected `display` or `display(..)`"));
            }
            if meta.input.peek(syn::token::Paren) {
                let mut params = Vec::new();
                meta.parse_nested_meta(|param| {
                    params.push(param.path);
                    Ok(())
                })?;
                display = Display::When(params);
            } else {
                display = Display::Always;
            }
            Ok(())
        })?;
    }
    Ok(display)
}

/// Expand `#[derive(TextCaps)]`.
pub fn expand_derive_text_caps(input: DeriveInput) -> syn::Result<TokenStream> {
    let display = parse_display(&input.attrs)?;
    let paths = caps_paths();
    let text_caps = &paths.text_caps;
    let detect = &paths.detect;
    let name = &input.ident;
    let mut generics = input.generics.clone();

    let native = if !is_generic(&input) {
        lift_check(quote! {
            #[allow(unused_imports)]
            use #detect::DisplayFallback;
            #detect::Detect::<#name>::IS_DISPLAY
        })
    } else {
        match display {
            Display::Missing => paths.absent.clone(),
            Display::Always => paths.present.clone(),
            Display::When(params) => {
                let predicates = &mut generics.make_where_clause().predicates;
                for param in &params {
                    predicates.push(syn::parse_quote! { #param: #text_caps });
                }
                and_chain(
                    params
                        .iter()
                        .map(|param| quote! { <#param as #text_caps>::Native })
                        .collect(),
                )
            }
        }
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #text_caps for #name #ty_generics #where_clause {
            type Native = #native;
        }
    })
}
