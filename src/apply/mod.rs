//! # Tuple Application
//!
//! Call a function with the elements of a tuple as its positional
//! arguments, for any arity from 0 to 16.
//!
//! The tuple's value category carries through to the arguments:
//!
//! | Tuple passed | Arguments received |
//! |--------------|--------------------|
//! | `(A, B)` | `A, B` (moved) |
//! | `&(A, B)` | `&A, &B` |
//! | `&mut (A, B)` | `&mut A, &mut B` |
//! | `(&mut A, B)` | `&mut A, B` |
//!
//! ```
//! use tola_compat::apply;
//!
//! fn add3(a: i32, b: i32, c: i32) -> i32 { a + b + c }
//!
//! assert_eq!(apply(add3, (1, 2, 3)), 6);
//! assert_eq!(apply(|| "nothing", ()), "nothing");
//!
//! // Methods are plain functions whose receiver comes first.
//! assert_eq!(apply(str::len, ("four",)), 4);
//! ```
//!
//! In `const` contexts use [`const_apply!`](crate::const_apply), which
//! performs the same expansion at macro time:
//!
//! ```
//! use tola_compat::const_apply;
//!
//! const fn mul(a: u32, b: u32) -> u32 { a * b }
//! const AREA: u32 = const_apply!(mul, (6, 7));
//! assert_eq!(AREA, 42);
//!
//! // A tuple that is not written out needs its arity first.
//! const SIDES: (u32, u32) = (3, 5);
//! const RECT: u32 = const_apply!(2; mul, SIDES);
//! assert_eq!(RECT, 15);
//! ```
//!
//! Mismatched arity or element types are rejected by the compiler:
//!
//! ```compile_fail
//! use tola_compat::apply;
//!
//! fn pair(a: i32, b: i32) -> i32 { a + b }
//! let _ = apply(pair, (1, 2, 3));
//! ```
//!
//! Callables that take an [`Identity`] can be told apart from others with
//! [`takes_identity!`](crate::takes_identity), see [`identity`].

pub mod identity;

pub use identity::Identity;

/// A tuple that can be unpacked into the arguments of `F`.
///
/// Implemented for tuples of arity 0..=16, by value, by shared reference
/// and by unique reference.
pub trait Apply<F> {
    /// What `F` returns.
    type Output;

    /// Invoke `f` once with this tuple's elements, in order.
    fn apply(self, f: F) -> Self::Output;
}

/// Invoke `f` with the elements of `tuple` as positional arguments.
///
/// Equivalent to writing the call out by hand: `f(t.0, t.1, ..)`.
#[inline(always)]
pub fn apply<F, T>(f: F, tuple: T) -> T::Output
where
    T: Apply<F>,
{
    tuple.apply(f)
}

// Arity 0 through 16; owned tuples forward to FnOnce::call_once with `nightly`.
macros::impl_tuple_apply!(16);
