//! Autoref-based trait detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time trait detection on concrete types.
//!
//! ## How it works
//!
//! For each trait T we want to detect:
//! 1. Define a fallback trait with `const IS_T: bool = false`
//! 2. Implement fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_T = true` for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::IS_T`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`.

use core::fmt::Display;
use core::marker::PhantomData;

use crate::pod::{Pod, StandardLayout};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a trait.
macro_rules! impl_detect {
    ($Trait:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: ?Sized + $Trait> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

// Trivially copyable
impl_detect!(Copy => IS_COPY);
impl_detect!(StandardLayout => IS_STANDARD_LAYOUT);
// Legacy single-predicate POD
impl_detect!(Pod => IS_POD);

// Native text conversion
impl_detect!(Display => IS_DISPLAY);
