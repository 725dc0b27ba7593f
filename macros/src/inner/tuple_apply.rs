//! Tuple application impl generation.
//!
//! For each arity N the index sequence `0..N` is expanded into one call
//! expression `f(t.0, t.1, ..)`, for owned, shared and unique tuples.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, Index, LitInt};

pub struct ArityInput {
    pub max: usize,
}

impl Parse for ArityInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(ArityInput { max })
    }
}

fn expand_arity(arity: usize) -> TokenStream {
    let apply = quote! { ::tola_compat::apply::Apply };
    let params: Vec<_> = (0..arity).map(|i| format_ident!("A{}", i)).collect();
    let indices: Vec<_> = (0..arity).map(Index::from).collect();

    quote! {
        #[cfg(not(feature = "nightly"))]
        impl<F, R, #(#params),*> #apply<F> for (#(#params,)*)
        where
            F: FnOnce(#(#params),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn apply(self, f: F) -> R {
                f(#(self.#indices),*)
            }
        }

        #[cfg(feature = "nightly")]
        impl<F, R, #(#params),*> #apply<F> for (#(#params,)*)
        where
            F: FnOnce(#(#params),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn apply(self, f: F) -> R {
                ::core::ops::FnOnce::call_once(f, self)
            }
        }

        impl<'a, F, R, #(#params),*> #apply<F> for &'a (#(#params,)*)
        where
            F: FnOnce(#(&'a #params),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn apply(self, f: F) -> R {
                f(#(&self.#indices),*)
            }
        }

        impl<'a, F, R, #(#params),*> #apply<F> for &'a mut (#(#params,)*)
        where
            F: FnOnce(#(&'a mut #params),*) -> R,
        {
            type Output = R;

            #[inline(always)]
            fn apply(self, f: F) -> R {
                f(#(&mut self.#indices),*)
            }
        }
    }
}

/// Generate `Apply` impls for arities `0..=max`.
pub fn expand_tuple_apply(input: ArityInput) -> TokenStream {
    let impls = (0..=input.max).map(expand_arity);
    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_arity() {
        let out = expand_arity(0).to_string();
        assert!(out.contains("for ()"));
        assert!(out.contains("f ()"));
    }

    #[test]
    fn test_indices_in_order() {
        let out = expand_arity(3).to_string();
        assert!(out.contains("f (self . 0 , self . 1 , self . 2)"));
        assert!(out.contains("f (& self . 0 , & self . 1 , & self . 2)"));
        assert!(out.contains("for (A0 , A1 , A2 ,)"));
    }

    #[test]
    fn test_impl_count() {
        let out = expand_tuple_apply(ArityInput { max: 2 }).to_string();
        // owned (two cfg variants), shared and unique per arity
        assert_eq!(out.matches("type Output").count(), 3 * 4);
    }
}
