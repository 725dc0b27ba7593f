//! Procedural macros for tola-compat
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(StandardLayout)]` | struct/enum/union | Certify a language-fixed layout |
//! | `#[derive(PodCaps)]` | struct/enum/union | Type-level POD classification |
//! | `#[derive(TextCaps)]` | struct/enum/union | Native-text capability witness |
//! | `const_apply!(f, (a, b))` | - | Tuple application in const contexts |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Copy, StandardLayout, PodCaps)]
//! #[repr(C)]
//! struct Vertex { pos: [f32; 3], id: u32 }
//!
//! const POD: bool = is_pod::<Vertex>();
//! const AREA: u32 = const_apply!(mul, (6, 7));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `Apply` impls for tuples of arity `0..=N`.
///
/// # Usage
/// ```ignore
/// impl_tuple_apply!(16);
/// ```
#[proc_macro]
pub fn impl_tuple_apply(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuple_apply::ArityInput);
    inner::tuple_apply::expand_tuple_apply(input).into()
}

/// Generate `StandardLayout` and `PodCaps` impls for primitive, core,
/// alloc and std types, plus tuples.
#[proc_macro]
pub fn impl_std_pod_caps(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_std_pod_caps().into()
}

/// Generate `TextCaps` impls for primitive, core, alloc and std types,
/// plus tuples.
#[proc_macro]
pub fn impl_std_text_caps(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_std_text_caps().into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Call a function with a tuple's elements as arguments, in a const context.
///
/// The arity is read off a literal tuple. A macro cannot see a tuple's
/// type, so any other tuple expression needs the arity first.
///
/// # Usage
/// ```ignore
/// const fn add(a: i32, b: i32) -> i32 { a + b }
/// const SUM: i32 = const_apply!(add, (40, 2));
/// const PAIR: (i32, i32) = (1, 2);
/// const ALSO: i32 = const_apply!(2; add, PAIR);
/// ```
#[proc_macro]
pub fn const_apply(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ConstApplyInput);
    user::expand_const_apply(input).into()
}

/// Derive macro to certify that a type's layout is fixed by the language.
///
/// Requires `#[repr(C)]` or `#[repr(transparent)]` (structs and unions) or
/// `#[repr(C)]` / an integer repr (enums), and every field to be
/// `StandardLayout`.
///
/// # Usage
/// ```ignore
/// #[derive(StandardLayout)]
/// #[repr(C)]
/// struct Header { magic: u32, len: u16, flags: u16 }
/// ```
#[proc_macro_derive(StandardLayout)]
pub fn derive_standard_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_standard_layout(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derive macro to implement `PodCaps`.
///
/// Non-generic types are classified by probing their `Copy` and
/// `StandardLayout` impls. Generic types get a field-wise conjunction for
/// layout and opt in to copyability with `#[pod_caps(copy)]`, which is
/// checked against the type's `Copy` impl.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Copy, StandardLayout, PodCaps)]
/// #[repr(C)]
/// struct Pixel { r: u8, g: u8, b: u8 }
///
/// #[derive(Clone, Copy, PodCaps)]
/// #[repr(transparent)]
/// #[pod_caps(copy)]
/// struct Meters<T>(T);
/// ```
#[proc_macro_derive(PodCaps, attributes(pod_caps))]
pub fn derive_pod_caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_pod_caps(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derive macro to implement `TextCaps`.
///
/// # Usage
/// ```ignore
/// #[derive(Debug, TextCaps)]
/// struct Config { retries: u8 }
///
/// // Display whenever `T` is
/// #[derive(Debug, TextCaps)]
/// #[text_caps(display(T))]
/// struct Tagged<T>(T);
/// ```
#[proc_macro_derive(TextCaps, attributes(text_caps))]
pub fn derive_text_caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_text_caps(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
