//! Layout derives: `#[derive(StandardLayout)]` and `#[derive(PodCaps)]`.
//!
//! | Derive | Non-generic type | Generic type |
//! |--------|------------------|--------------|
//! | `StandardLayout` | repr check + field bounds | repr check + field bounds |
//! | `PodCaps` | `Detect` checks | field-wise conjunction, `#[pod_caps(copy)]` opt-in |

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::common::{and_chain, caps_paths, field_types, is_generic, lift_check, where_bound, Repr};

fn layout_error(input: &DeriveInput) -> syn::Error {
    let hint = match input.data {
        syn::Data::Enum(_) => "#[repr(C)] or an integer repr such as #[repr(u8)]",
        _ => "#[repr(C)] or #[repr(transparent)]",
    };
    syn::Error::new_spanned(
        &input.ident,
        format!("StandardLayout requires {} on `{}`", hint, input.ident),
    )
}

/// Expand `#[derive(StandardLayout)]`.
pub fn expand_derive_standard_layout(input: DeriveInput) -> syn::Result<TokenStream> {
    let repr = Repr::from_attrs(&input.attrs)?;
    if !repr.fixes_layout(&input.data) {
        return Err(layout_error(&input));
    }

    let paths = caps_paths();
    let standard_layout = &paths.standard_layout;
    let name = &input.ident;

    let mut generics = input.generics.clone();
    let predicates = &mut generics.make_where_clause().predicates;
    for ty in field_types(&input) {
        predicates.push(where_bound(ty, standard_layout));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        unsafe impl #impl_generics #standard_layout for #name #ty_generics #where_clause {}
    })
}

/// Options from `#[pod_caps(..)]`.
#[derive(Default)]
struct PodCapsArgs {
    copy: bool,
}

impl PodCapsArgs {
    fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut args = PodCapsArgs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("pod_caps")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("copy") {
                    args.copy = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `copy`"))
                }
            })?;
        }
        Ok(args)
    }
}

/// Expand `#[derive(PodCaps)]`.
pub fn expand_derive_pod_caps(input: DeriveInput) -> syn::Result<TokenStream> {
    let args = PodCapsArgs::from_attrs(&input.attrs)?;
    let repr = Repr::from_attrs(&input.attrs)?;
    let paths = caps_paths();
    let pod_caps = &paths.pod_caps;
    let detect = &paths.detect;
    let name = &input.ident;

    if !is_generic(&input) {
        // Concrete: ask the checks, which see the real Copy / StandardLayout impls.
        let check = |fallback: TokenStream, konst: TokenStream| {
            lift_check(quote! {
                #[allow(unused_imports)]
                use #detect::#fallback;
                #detect::Detect::<#name>::#konst
            })
        };
        let sl = check(quote! { StandardLayoutFallback }, quote! { IS_STANDARD_LAYOUT });
        let tc = check(quote! { CopyFallback }, quote! { IS_COPY });
        let pod = check(quote! { PodFallback }, quote! { IS_POD });
        return Ok(quote! {
            impl #pod_caps for #name {
                type StandardLayout = #sl;
                type TriviallyCopyable = #tc;
                type Pod = #pod;
            }
        });
    }

    let fields = field_types(&input);
    let absent = &paths.absent;
    let bool_trait = &paths.bool_trait;
    let params: Vec<syn::Type> = input
        .generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            syn::parse_quote! { #ident }
        })
        .collect();

    let conj = |assoc: TokenStream, tys: Vec<&syn::Type>| {
        and_chain(
            tys.iter()
                .map(|ty| quote! { <#ty as #pod_caps>::#assoc })
                .collect(),
        )
    };
    let sl = if repr.fixes_layout(&input.data) {
        conj(quote! { StandardLayout }, fields.clone())
    } else {
        quote! { #absent }
    };
    // Same bounds `#[derive(Copy)]` puts on the impl: every type parameter.
    let tc = if args.copy {
        conj(
            quote! { TriviallyCopyable },
            params.iter().chain(fields.iter().copied()).collect(),
        )
    } else {
        quote! { #absent }
    };
    let copy_check = if args.copy {
        copy_check(&input, &params)
    } else {
        quote! {}
    };

    let mut generics = input.generics.clone();
    let predicates = &mut generics.make_where_clause().predicates;
    for ty in params.iter().chain(fields.iter().copied()) {
        predicates.push(where_bound(ty, pod_caps));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #pod_caps for #name #ty_generics #where_clause {
            type StandardLayout = #sl;
            type TriviallyCopyable = #tc;
            type Pod = <#sl as #bool_trait>::And<#tc>;
        }

        #copy_check
    })
}

/// `#[pod_caps(copy)]` promises `Copy` whenever the type parameters are
/// `Copy`; make the compiler hold the type to it.
fn copy_check(input: &DeriveInput, params: &[syn::Type]) -> TokenStream {
    let name = &input.ident;
    let mut generics = input.generics.clone();
    let predicates = &mut generics.make_where_clause().predicates;
    for ty in params {
        predicates.push(syn::parse_quote! { #ty: ::core::marker::Copy });
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        const _: () = {
            #[allow(dead_code)]
            fn __pod_caps_copy #impl_generics () #where_clause {
                fn is_copy<X: ?Sized + ::core::marker::Copy>() {}
                is_copy::<#name #ty_generics>();
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(f: fn(DeriveInput) -> syn::Result<TokenStream>, src: &str) -> syn::Result<String> {
        f(syn::parse_str(src).unwrap()).map(|ts| ts.to_string())
    }

    #[test]
    fn test_standard_layout_requires_repr() {
        let err = derive(expand_derive_standard_layout, "struct Loose { a: u8 }").unwrap_err();
        assert!(err.to_string().contains("#[repr(C)]"));

        let out = derive(expand_derive_standard_layout, "#[repr(C)] struct Tight { a: u8, b: [u16; 2] }")
            .unwrap();
        assert!(out.contains("unsafe impl"));
        assert!(out.contains("u8 : :: tola_compat :: pod :: StandardLayout"));
        assert!(out.contains("[u16 ; 2] : :: tola_compat :: pod :: StandardLayout"));
    }

    #[test]
    fn test_standard_layout_enum_hint() {
        let err = derive(expand_derive_standard_layout, "enum Tag { A, B }").unwrap_err();
        assert!(err.to_string().contains("#[repr(u8)]"));
        assert!(derive(expand_derive_standard_layout, "#[repr(u8)] enum Tag { A, B }").is_ok());
    }

    #[test]
    fn test_pod_caps_concrete_uses_checks() {
        let out = derive(expand_derive_pod_caps, "#[repr(C)] struct P { a: u8 }").unwrap();
        assert!(out.contains("IS_STANDARD_LAYOUT"));
        assert!(out.contains("IS_COPY"));
        assert!(out.contains("IS_POD"));
    }

    #[test]
    fn test_pod_caps_generic_conjunction() {
        let out = derive(
            expand_derive_pod_caps,
            "#[repr(C)] #[pod_caps(copy)] struct G<T> { a: T, b: u8 }",
        )
        .unwrap();
        assert!(out.contains("< T as :: tola_compat :: pod :: PodCaps > :: TriviallyCopyable"));
        assert!(!out.contains("IS_COPY"));

        let out = derive(expand_derive_pod_caps, "struct H<T>(T);").unwrap();
        assert_eq!(out.matches(":: tola_compat :: primitives :: Absent").count(), 4);
        assert!(!out.contains("is_copy"));
    }

    #[test]
    fn test_pod_caps_copy_is_checked() {
        let out = derive(
            expand_derive_pod_caps,
            "#[repr(C)] #[pod_caps(copy)] struct G<T> { a: T }",
        )
        .unwrap();
        assert!(out.contains("T : :: core :: marker :: Copy"));
        assert!(out.contains("is_copy :: < G < T > > ()"));
    }

    #[test]
    fn test_pod_caps_copy_covers_phantom_params() {
        let out = derive(
            expand_derive_pod_caps,
            "#[repr(transparent)] #[pod_caps(copy)] struct Tag<T>(u32, PhantomData<T>);",
        )
        .unwrap();
        // The parameter itself joins the copyability conjunction.
        let tc = out.split("type TriviallyCopyable").nth(1).unwrap();
        let tc = tc.split(';').next().unwrap();
        assert!(tc.contains("< T as :: tola_compat :: pod :: PodCaps > :: TriviallyCopyable"));
        assert!(out.contains("T : :: tola_compat :: pod :: PodCaps"));
    }

    #[test]
    fn test_pod_caps_rejects_unknown_option() {
        let err = derive(expand_derive_pod_caps, "#[pod_caps(clone)] struct X<T>(T);").unwrap_err();
        assert!(err.to_string().contains("expected `copy`"));
    }
}
