//! Type-level boolean helpers
//!
//! Builds `Present` / `Absent` / `And` expressions and the absolute paths
//! generated code uses to reach the runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Absolute paths into `tola_compat` used by generated code.
pub struct CapsPaths {
    pub present: TokenStream,
    pub absent: TokenStream,
    pub bool_trait: TokenStream,
    pub lift: TokenStream,
    pub pod_caps: TokenStream,
    pub standard_layout: TokenStream,
    pub text_caps: TokenStream,
    pub detect: TokenStream,
}

pub fn caps_paths() -> CapsPaths {
    CapsPaths {
        present: quote! { ::tola_compat::primitives::Present },
        absent: quote! { ::tola_compat::primitives::Absent },
        bool_trait: quote! { ::tola_compat::primitives::Bool },
        lift: quote! { ::tola_compat::primitives::Lift },
        pod_caps: quote! { ::tola_compat::pod::PodCaps },
        standard_layout: quote! { ::tola_compat::pod::StandardLayout },
        text_caps: quote! { ::tola_compat::text::TextCaps },
        detect: quote! { ::tola_compat::detect },
    }
}

/// Fold type-level booleans with `And`; the empty conjunction is `Present`.
///
/// `[A, B, C]` becomes `<A as Bool>::And<<B as Bool>::And<C>>`.
pub fn and_chain(terms: Vec<TokenStream>) -> TokenStream {
    let paths = caps_paths();
    let bool_trait = &paths.bool_trait;
    let mut terms = terms.into_iter().rev();
    let Some(mut acc) = terms.next() else {
        return paths.present;
    };
    for term in terms {
        acc = quote! { <#term as #bool_trait>::And<#acc> };
    }
    acc
}

/// Lift a check expression to `Present` / `Absent`.
pub fn lift_check(check: TokenStream) -> TokenStream {
    let lift = caps_paths().lift;
    quote! { #lift<{ #check }> }
}

/// Parse the inside of a generic parameter list, e.g. `"'a, T: ?Sized"`.
pub fn parse_generics(params: &str) -> syn::Generics {
    if params.trim().is_empty() {
        return syn::Generics::default();
    }
    syn::parse_str(&format!("<{}>", params)).expect("generic parameter list must parse")
}

/// `ty: bound` as a where-clause predicate.
pub fn where_bound(ty: &syn::Type, bound: &TokenStream) -> syn::WherePredicate {
    syn::parse_quote! { #ty: #bound }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_chain_shapes() {
        assert!(and_chain(vec![]).to_string().contains("Present"));

        let single = and_chain(vec![quote! { X }]);
        assert_eq!(single.to_string(), "X");

        let pair = and_chain(vec![quote! { X }, quote! { Y }]).to_string();
        assert!(pair.starts_with("< X as"));
        assert!(pair.ends_with("And < Y >"));
    }

    #[test]
    fn test_parse_generics() {
        assert!(parse_generics("").params.is_empty());
        assert_eq!(parse_generics("'a, T: ?Sized").params.len(), 2);
        assert_eq!(parse_generics("T, const N: usize").params.len(), 2);
    }
}
