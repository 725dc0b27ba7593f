//! Standard library type classification for auto-generation.
//!
//! Single source of truth for every std impl of `StandardLayout`,
//! `PodCaps` and `TextCaps`. To cover a new type, add a row here.

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::{and_chain, caps_paths, parse_generics, where_bound};

/// How a row answers one capability.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Yes,
    No,
    /// Conjunction of the named parameters' answers ("T" or "T, E").
    Of(&'static str),
}

use Rule::*;

/// Which feature a row needs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Core,
    Alloc,
    Std,
}

/// `(type, generics, standard layout, trivially copyable)`
type PodRow = (&'static str, &'static str, Rule, Rule);

/// `(type, generics, native text)`
type TextRow = (&'static str, &'static str, Rule);

// =============================================================================
// Layout Table
// =============================================================================

/// Primitive types (always available).
pub const PRIMITIVE_TYPES: &[&str] = &[
    "()",
    "bool",
    "char",

    // Unsigned integers
    "u8",
    "u16",
    "u32",
    "u64",
    "u128",
    "usize",

    // Signed integers
    "i8",
    "i16",
    "i32",
    "i64",
    "i128",
    "isize",

    // Floats
    "f32",
    "f64",

    // NonZero
    "core::num::NonZeroU8",
    "core::num::NonZeroU16",
    "core::num::NonZeroU32",
    "core::num::NonZeroU64",
    "core::num::NonZeroU128",
    "core::num::NonZeroUsize",
    "core::num::NonZeroI8",
    "core::num::NonZeroI16",
    "core::num::NonZeroI32",
    "core::num::NonZeroI64",
    "core::num::NonZeroI128",
    "core::num::NonZeroIsize",
];

pub const CORE_POD_TYPES: &[PodRow] = &[
    // Arrays and slices
    ("[T; N]", "T, const N: usize", Of("T"), Of("T")),
    ("[T]", "T", No, No),
    ("str", "", No, No),

    // Thin pointers and references
    ("*const T", "T", Yes, Yes),
    ("*mut T", "T", Yes, Yes),
    ("&'a T", "'a, T", Yes, Yes),
    ("&'a mut T", "'a, T", Yes, No),

    // Fat pointers: copyable, but (address, length) has no fixed layout
    ("*const str", "", No, Yes),
    ("*mut str", "", No, Yes),
    ("&'a str", "'a", No, Yes),
    ("&'a mut str", "'a", No, No),
    ("*const [T]", "T", No, Yes),
    ("*mut [T]", "T", No, Yes),
    ("&'a [T]", "'a, T", No, Yes),
    ("&'a mut [T]", "'a, T", No, No),

    // Transparent wrappers
    ("core::mem::ManuallyDrop<T>", "T", Of("T"), Of("T")),
    ("core::mem::MaybeUninit<T>", "T", Of("T"), Of("T")),
    ("core::num::Wrapping<T>", "T", Of("T"), Of("T")),
    ("core::cell::Cell<T>", "T", Of("T"), No),
    ("core::cell::UnsafeCell<T>", "T", Of("T"), No),

    // Marker types
    ("core::marker::PhantomData<T>", "T: ?Sized", Yes, Yes),
    ("core::marker::PhantomPinned", "", Yes, Yes),

    // Explicit-repr enums
    ("core::cmp::Ordering", "", Yes, Yes),

    // Compiler-chosen layout
    ("core::cell::RefCell<T>", "T", No, No),
    ("Option<T>", "T", No, Of("T")),
    ("Result<T, E>", "T, E", No, Of("T, E")),
    ("core::time::Duration", "", No, Yes),
    ("core::ops::Range<T>", "T", No, No),
    ("core::ops::RangeInclusive<T>", "T", No, No),
    ("core::ops::RangeFull", "", No, Yes),

    // Atomics
    ("core::sync::atomic::AtomicBool", "", Yes, No),
    ("core::sync::atomic::AtomicI8", "", Yes, No),
    ("core::sync::atomic::AtomicI16", "", Yes, No),
    ("core::sync::atomic::AtomicI32", "", Yes, No),
    ("core::sync::atomic::AtomicI64", "", Yes, No),
    ("core::sync::atomic::AtomicIsize", "", Yes, No),
    ("core::sync::atomic::AtomicU8", "", Yes, No),
    ("core::sync::atomic::AtomicU16", "", Yes, No),
    ("core::sync::atomic::AtomicU32", "", Yes, No),
    ("core::sync::atomic::AtomicU64", "", Yes, No),
    ("core::sync::atomic::AtomicUsize", "", Yes, No),
];

/// Alloc library types (requires "alloc" feature).
pub const ALLOC_POD_TYPES: &[PodRow] = &[
    ("alloc::string::String", "", No, No),
    ("alloc::vec::Vec<T>", "T", No, No),
    ("alloc::boxed::Box<T>", "T: ?Sized", No, No),
    ("alloc::rc::Rc<T>", "T: ?Sized", No, No),
    ("alloc::sync::Arc<T>", "T: ?Sized", No, No),
    ("alloc::collections::VecDeque<T>", "T", No, No),
];

/// Standard library types (requires "std" feature).
pub const STD_POD_TYPES: &[PodRow] = &[
    ("std::time::Instant", "", No, Yes),
    ("std::time::SystemTime", "", No, Yes),
    ("std::path::PathBuf", "", No, No),
    ("std::ffi::OsString", "", No, No),
];

// =============================================================================
// Text Table
// =============================================================================

pub const CORE_TEXT_TYPES: &[TextRow] = &[
    ("str", "", Yes),
    ("[T]", "T", No),
    ("[T; N]", "T, const N: usize", No),

    ("&'a T", "'a, T: ?Sized", Of("T")),
    ("&'a mut T", "'a, T: ?Sized", Of("T")),
    ("*const T", "T: ?Sized", No),
    ("*mut T", "T: ?Sized", No),

    ("core::num::Wrapping<T>", "T", Of("T")),
    ("core::cell::Cell<T>", "T", No),
    ("core::marker::PhantomData<T>", "T: ?Sized", No),
    ("core::cmp::Ordering", "", No),
    ("core::fmt::Arguments<'a>", "'a", Yes),

    ("Option<T>", "T", No),
    ("Result<T, E>", "T, E", No),
    ("core::time::Duration", "", No),
    ("core::ops::Range<T>", "T", No),
    ("core::ops::RangeInclusive<T>", "T", No),
];

pub const ALLOC_TEXT_TYPES: &[TextRow] = &[
    ("alloc::string::String", "", Yes),
    ("alloc::borrow::Cow<'a, str>", "'a", Yes),
    ("alloc::vec::Vec<T>", "T", No),
    ("alloc::boxed::Box<T>", "T: ?Sized", Of("T")),
    ("alloc::rc::Rc<T>", "T: ?Sized", Of("T")),
    ("alloc::sync::Arc<T>", "T: ?Sized", Of("T")),
    ("alloc::collections::VecDeque<T>", "T", No),
];

pub const STD_TEXT_TYPES: &[TextRow] = &[
    ("std::net::IpAddr", "", Yes),
    ("std::net::Ipv4Addr", "", Yes),
    ("std::net::Ipv6Addr", "", Yes),
    ("std::net::SocketAddr", "", Yes),
    ("std::io::Error", "", Yes),
    ("std::time::Instant", "", No),
    ("std::time::SystemTime", "", No),
    ("std::path::PathBuf", "", No),
    ("std::path::Path", "", No),
    ("std::ffi::OsString", "", No),
];

/// Largest tuple arity covered by the std caps impls.
pub const MAX_TUPLE_ARITY: usize = 12;

/// Largest function pointer arity covered by the std caps impls.
pub const MAX_FN_ARITY: usize = 12;

/// Function pointer flavours: `fn`, `unsafe fn`, `extern "C" fn`, `unsafe extern "C" fn`.
fn fn_pointer_prefixes() -> Vec<TokenStream> {
    vec![
        quote! { fn },
        quote! { unsafe fn },
        quote! { extern "C" fn },
        quote! { unsafe extern "C" fn },
    ]
}

// =============================================================================
// Expansion
// =============================================================================

fn gate_attr(gate: Gate) -> TokenStream {
    match gate {
        Gate::Core => quote! {},
        Gate::Alloc => quote! { #[cfg(feature = "alloc")] },
        Gate::Std => quote! { #[cfg(feature = "std")] },
    }
}

fn params(names: &str) -> Vec<syn::Type> {
    names
        .split(',')
        .map(|name| syn::parse_str(name.trim()).expect("table parameter must be a type"))
        .collect()
}

/// Type-level answer of `rule` for capability `assoc` of trait `caps`.
fn rule_type(rule: Rule, caps: &TokenStream, assoc: &TokenStream) -> TokenStream {
    let paths = caps_paths();
    let present = &paths.present;
    let absent = &paths.absent;
    match rule {
        Yes => quote! { #present },
        No => quote! { #absent },
        Of(names) => and_chain(
            params(names)
                .iter()
                .map(|p| quote! { <#p as #caps>::#assoc })
                .collect(),
        ),
    }
}

fn rule_bounds(rule: Rule, bound: &TokenStream) -> Vec<syn::WherePredicate> {
    match rule {
        Of(names) => params(names).iter().map(|p| where_bound(p, bound)).collect(),
        _ => Vec::new(),
    }
}

fn expand_pod_row(row: &PodRow, gate: Gate) -> TokenStream {
    let (path, generics, layout, copy) = *row;
    let ty: syn::Type = syn::parse_str(path).expect("table type must parse");
    let cfg = gate_attr(gate);
    let paths = caps_paths();
    let pod_caps = &paths.pod_caps;
    let standard_layout = &paths.standard_layout;
    let bool_trait = &paths.bool_trait;
    let absent = &paths.absent;

    let sl_assoc = quote! { StandardLayout };
    let tc_assoc = quote! { TriviallyCopyable };
    let sl = rule_type(layout, pod_caps, &sl_assoc);
    let tc = rule_type(copy, pod_caps, &tc_assoc);
    let pod = match (layout, copy) {
        (Yes, Yes) => quote! { #sl },
        (No, _) | (_, No) => quote! { #absent },
        _ => quote! { <#sl as #bool_trait>::And<#tc> },
    };

    let mut caps_generics = parse_generics(generics);
    let predicates = &mut caps_generics.make_where_clause().predicates;
    for pred in rule_bounds(layout, pod_caps).into_iter().chain(rule_bounds(copy, pod_caps)) {
        predicates.push(pred);
    }
    let (impl_generics, _, where_clause) = caps_generics.split_for_impl();

    let marker = match layout {
        No => quote! {},
        _ => {
            let mut marker_generics = parse_generics(generics);
            let predicates = &mut marker_generics.make_where_clause().predicates;
            for pred in rule_bounds(layout, standard_layout) {
                predicates.push(pred);
            }
            let (impl_generics, _, where_clause) = marker_generics.split_for_impl();
            quote! {
                #cfg
                unsafe impl #impl_generics #standard_layout for #ty #where_clause {}
            }
        }
    };

    quote! {
        #marker

        #cfg
        impl #impl_generics #pod_caps for #ty #where_clause {
            type StandardLayout = #sl;
            type TriviallyCopyable = #tc;
            type Pod = #pod;
        }
    }
}

fn expand_text_row(row: &TextRow, gate: Gate) -> TokenStream {
    let (path, generics, native) = *row;
    let ty: syn::Type = syn::parse_str(path).expect("table type must parse");
    let cfg = gate_attr(gate);
    let paths = caps_paths();
    let text_caps = &paths.text_caps;

    let native_ty = rule_type(native, text_caps, &quote! { Native });
    let mut generics = parse_generics(generics);
    let predicates = &mut generics.make_where_clause().predicates;
    for pred in rule_bounds(native, text_caps) {
        predicates.push(pred);
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        #cfg
        impl #impl_generics #text_caps for #ty #where_clause {
            type Native = #native_ty;
        }
    }
}

fn tuple_idents(arity: usize) -> Vec<syn::Ident> {
    (0..arity).map(|i| quote::format_ident!("A{}", i)).collect()
}

/// Generate `StandardLayout` and `PodCaps` impls for all std types.
pub fn expand_std_pod_caps() -> TokenStream {
    let mut impls = Vec::new();

    for path in PRIMITIVE_TYPES {
        impls.push(expand_pod_row(&(*path, "", Yes, Yes), Gate::Core));
    }
    for row in CORE_POD_TYPES {
        impls.push(expand_pod_row(row, Gate::Core));
    }
    for row in ALLOC_POD_TYPES {
        impls.push(expand_pod_row(row, Gate::Alloc));
    }
    for row in STD_POD_TYPES {
        impls.push(expand_pod_row(row, Gate::Std));
    }

    // Tuples: layout is compiler-chosen, copyability is element-wise.
    let paths = caps_paths();
    let pod_caps = &paths.pod_caps;
    let absent = &paths.absent;
    for arity in 1..=MAX_TUPLE_ARITY {
        let idents = tuple_idents(arity);
        let tc = and_chain(
            idents
                .iter()
                .map(|id| quote! { <#id as #pod_caps>::TriviallyCopyable })
                .collect(),
        );
        impls.push(quote! {
            impl<#(#idents: #pod_caps),*> #pod_caps for (#(#idents,)*) {
                type StandardLayout = #absent;
                type TriviallyCopyable = #tc;
                type Pod = #absent;
            }
        });
    }

    // Function pointers: thin, Copy, address-sized.
    let standard_layout = &paths.standard_layout;
    let present = &paths.present;
    for arity in 0..=MAX_FN_ARITY {
        let idents = tuple_idents(arity);
        for prefix in fn_pointer_prefixes() {
            impls.push(quote! {
                unsafe impl<R, #(#idents),*> #standard_layout for #prefix(#(#idents),*) -> R {}

                impl<R, #(#idents),*> #pod_caps for #prefix(#(#idents),*) -> R {
                    type StandardLayout = #present;
                    type TriviallyCopyable = #present;
                    type Pod = #present;
                }
            });
        }
    }

    quote! { #(#impls)* }
}

/// Generate `TextCaps` impls for all std types.
pub fn expand_std_text_caps() -> TokenStream {
    let mut impls = Vec::new();

    for path in PRIMITIVE_TYPES {
        // The unit type has no Display impl.
        let native = if *path == "()" { No } else { Yes };
        impls.push(expand_text_row(&(*path, "", native), Gate::Core));
    }
    for row in CORE_TEXT_TYPES {
        impls.push(expand_text_row(row, Gate::Core));
    }
    for row in ALLOC_TEXT_TYPES {
        impls.push(expand_text_row(row, Gate::Alloc));
    }
    for row in STD_TEXT_TYPES {
        impls.push(expand_text_row(row, Gate::Std));
    }

    let paths = caps_paths();
    let text_caps = &paths.text_caps;
    let absent = &paths.absent;
    for arity in 1..=MAX_TUPLE_ARITY {
        let idents = tuple_idents(arity);
        impls.push(quote! {
            impl<#(#idents),*> #text_caps for (#(#idents,)*) {
                type Native = #absent;
            }
        });
    }

    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_parses() {
        for path in PRIMITIVE_TYPES {
            syn::parse_str::<syn::Type>(path).unwrap();
        }
        let pod_rows = CORE_POD_TYPES.iter().chain(ALLOC_POD_TYPES).chain(STD_POD_TYPES);
        for (path, generics, ..) in pod_rows {
            syn::parse_str::<syn::Type>(path).unwrap();
            parse_generics(generics);
        }
        let text_rows = CORE_TEXT_TYPES.iter().chain(ALLOC_TEXT_TYPES).chain(STD_TEXT_TYPES);
        for (path, generics, _) in text_rows {
            syn::parse_str::<syn::Type>(path).unwrap();
            parse_generics(generics);
        }
    }

    #[test]
    fn test_standard_layout_marker_only_when_possible() {
        let out = expand_pod_row(&("alloc::string::String", "", No, No), Gate::Alloc).to_string();
        assert!(!out.contains("unsafe impl"));

        let out = expand_pod_row(&("[T; N]", "T, const N: usize", Of("T"), Of("T")), Gate::Core).to_string();
        assert!(out.contains("unsafe impl"));
        assert!(out.contains("StandardLayout for [T ; N]"));
    }

    #[test]
    fn test_fat_pointers_are_not_standard_layout() {
        let out = expand_std_pod_caps().to_string();
        assert!(out.contains("PodCaps for & 'a str"));
        assert!(out.contains("PodCaps for & 'a [T]"));
        assert!(!out.contains("StandardLayout for & 'a str"));
        assert!(!out.contains("StandardLayout for * const [T]"));
    }

    #[test]
    fn test_fn_pointer_flavours() {
        let out = expand_std_pod_caps().to_string();
        assert!(out.contains("StandardLayout for fn () -> R"));
        assert!(out.contains("PodCaps for unsafe extern \"C\" fn (A0 , A1) -> R"));
        let last = format!("A{}) -> R", MAX_FN_ARITY - 1);
        assert_eq!(out.matches(&last).count(), 4 * 2);
    }
}
