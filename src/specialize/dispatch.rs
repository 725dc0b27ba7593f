//! Type-Level Dispatch System
//!
//! Provides zero-overhead method dispatch based on capabilities.
//! Uses pure type selection instead of `if` branches.
//!
//! ## Core Concepts
//!
//! 1. `MethodImpl<T, Output>` - an implementation expressed as a type
//! 2. `BoolMethodCall<Then, Else, T, Output>` - `Present` calls `Then`, `Absent` calls `Else`
//! 3. Only the selected branch's bounds have to hold
//!
//! ## Example
//!
//! ```
//! use tola_compat::{Absent, Present};
//! use tola_compat::specialize::{BoolMethodCall, MethodImpl};
//!
//! struct Loud;
//! struct Quiet;
//!
//! impl MethodImpl<str, usize> for Loud {
//!     fn call(value: &str) -> usize { value.len() * 2 }
//! }
//! impl MethodImpl<str, usize> for Quiet {
//!     fn call(value: &str) -> usize { value.len() }
//! }
//!
//! assert_eq!(<Present as BoolMethodCall<Loud, Quiet, str, usize>>::call("ab"), 4);
//! assert_eq!(<Absent as BoolMethodCall<Loud, Quiet, str, usize>>::call("ab"), 2);
//! ```

use crate::primitives::{Absent, Bool, Present};

// =============================================================================
// Method Implementation Trait
// =============================================================================

/// Trait for method implementations that can be type-selected.
pub trait MethodImpl<T: ?Sized, Output = ()> {
    fn call(value: &T) -> Output;
}

// =============================================================================
// Bool-driven Selection
// =============================================================================

/// Call a method implementation through a type-level boolean.
///
/// Implemented for `Present` and `Absent`: the impl for `Present` only
/// requires `Then: MethodImpl<T, Output>`, the impl for `Absent` only
/// requires `Else: MethodImpl<T, Output>`.
pub trait BoolMethodCall<Then, Else, T: ?Sized, Output>: Bool {
    fn call(value: &T) -> Output;
}

impl<Then, Else, T: ?Sized, Output> BoolMethodCall<Then, Else, T, Output> for Present
where
    Then: MethodImpl<T, Output>,
{
    #[inline(always)]
    fn call(value: &T) -> Output {
        Then::call(value)
    }
}

impl<Then, Else, T: ?Sized, Output> BoolMethodCall<Then, Else, T, Output> for Absent
where
    Else: MethodImpl<T, Output>,
{
    #[inline(always)]
    fn call(value: &T) -> Output {
        Else::call(value)
    }
}
