//! `const_apply!(f, (a, b))` and `const_apply!(N; f, tuple)`
//!
//! Expands the index sequence `0..N` into a destructuring match, so the
//! call is an ordinary expression usable in `const` items. `N` is read off
//! a literal tuple; any other tuple expression needs it spelled out.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, Expr, LitInt, Token};

pub struct ConstApplyInput {
    pub arity: usize,
    pub func: Expr,
    pub tuple: Expr,
}

impl Parse for ConstApplyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let explicit = if input.peek(LitInt) && input.peek2(Token![;]) {
            let lit: LitInt = input.parse()?;
            input.parse::<Token![;]>()?;
            Some(lit.base10_parse::<usize>()?)
        } else {
            None
        };
        let func: Expr = input.parse()?;
        input.parse::<Token![,]>()?;
        let tuple: Expr = input.parse()?;
        // Optional trailing comma
        let _ = input.parse::<Option<Token![,]>>()?;

        let arity = match (explicit, literal_len(&tuple)) {
            (Some(arity), _) | (None, Some(arity)) => arity,
            (None, None) => {
                return Err(syn::Error::new_spanned(
                    &tuple,
                    "const_apply! needs the arity (`N; f, tuple`) unless the tuple is written out",
                ));
            }
        };
        Ok(ConstApplyInput { arity, func, tuple })
    }
}

/// Element count of a tuple literal, looking through `$t:expr` groups.
fn literal_len(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Tuple(literal) => Some(literal.elems.len()),
        Expr::Group(group) => literal_len(&group.expr),
        _ => None,
    }
}

pub fn expand_const_apply(input: ConstApplyInput) -> TokenStream {
    let ConstApplyInput { arity, func, tuple } = input;
    let f = format_ident!("__apply_f", span = Span::mixed_site());
    let args: Vec<_> = (0..arity)
        .map(|i| format_ident!("__apply_{}", i, span = Span::mixed_site()))
        .collect();

    // Callable first, then the tuple, each evaluated exactly once.
    quote! {
        match (#func, #tuple) {
            (#f, (#(#args,)*)) => #f(#(#args),*),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> syn::Result<String> {
        syn::parse_str::<ConstApplyInput>(src).map(|input| expand_const_apply(input).to_string())
    }

    #[test]
    fn test_expands_each_index() {
        let out = expand("3; add, (1, 2, 3)").unwrap();
        assert!(out.contains("(__apply_0 , __apply_1 , __apply_2 ,)"));
        assert!(out.contains("__apply_f (__apply_0 , __apply_1 , __apply_2)"));
    }

    #[test]
    fn test_zero_and_one() {
        assert!(expand("0; f, ()").unwrap().contains("(__apply_f , ())"));
        assert!(expand("1; f, (x,),").unwrap().contains("(__apply_0 ,)"));
    }

    #[test]
    fn test_arity_from_literal_tuple() {
        let out = expand("add, (1, 2, 3)").unwrap();
        assert!(out.contains("__apply_f (__apply_0 , __apply_1 , __apply_2)"));
        assert!(expand("f, ()").unwrap().contains("__apply_f ()"));
        // `(x)` is a parenthesized value, `(x,)` a one-element tuple.
        assert!(expand("f, (x,)").unwrap().contains("(__apply_0 ,)"));
        assert!(expand("f, (x)").is_err());
    }

    #[test]
    fn test_requires_arity_for_non_literal() {
        let err = expand("add, pair").unwrap_err();
        assert!(err.to_string().contains("needs the arity"));
        assert!(expand("add, make_pair()").is_err());
        assert!(expand("2; add, pair").is_ok());
    }
}
