//! Identity-accepting callables.
//!
//! A callable written as `|id: Identity| ..` can route values through
//! `id.call(v)`. [`takes_identity!`](crate::takes_identity) tells such
//! callables apart from ones that take nothing or something else.

/// The identity function as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Identity {
    /// Return `value` unchanged.
    #[inline(always)]
    pub fn call<T>(self, value: T) -> T {
        value
    }
}

/// Wrapper for autoref-based specialization.
#[doc(hidden)]
pub struct IdentityCheck<'a, F: ?Sized>(pub &'a F);

/// Higher-priority candidate: the callable accepts an `Identity`.
#[doc(hidden)]
pub trait AcceptsIdentity {
    fn __takes_identity(&self) -> bool;
}

impl<F, R> AcceptsIdentity for IdentityCheck<'_, F>
where
    F: FnOnce(Identity) -> R,
{
    #[inline(always)]
    fn __takes_identity(&self) -> bool {
        true
    }
}

/// Lower-priority candidate: everything else.
#[doc(hidden)]
pub trait RejectsIdentity {
    fn __takes_identity(&self) -> bool;
}

impl<F: ?Sized> RejectsIdentity for &IdentityCheck<'_, F> {
    #[inline(always)]
    fn __takes_identity(&self) -> bool {
        false
    }
}

/// Whether a callable can be invoked with a single [`Identity`] argument.
///
/// Nothing is called; the answer comes from the callable's type. Closure
/// parameters must be annotated.
///
/// ```
/// use tola_compat::apply::identity::Identity;
/// use tola_compat::takes_identity;
///
/// fn nullary() -> u8 { 0 }
///
/// assert!(takes_identity!(|id: Identity| id.call(5)));
/// assert!(!takes_identity!(nullary));
/// assert!(!takes_identity!(|n: u8| n));
/// ```
#[macro_export]
macro_rules! takes_identity {
    ($f:expr) => {{
        #[allow(unused_imports)]
        use $crate::apply::identity::{AcceptsIdentity as _, RejectsIdentity as _};
        (&$crate::apply::identity::IdentityCheck(&$f)).__takes_identity()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;

    fn through(id: Identity) -> &'static str {
        id.call("through")
    }

    fn two(a: Identity, b: u8) -> u8 {
        a.call(b)
    }

    #[test]
    fn test_identity_is_identity() {
        assert_eq!(Identity.call(7), 7);
        assert_eq!(Identity.call("text"), "text");
        assert_eq!(apply(through, (Identity,)), "through");
    }

    #[test]
    fn test_accepting_callables() {
        assert!(takes_identity!(through));
        assert!(takes_identity!(|id: Identity| id.call(1u8)));
        assert!(takes_identity!(core::convert::identity::<Identity>));
    }

    #[test]
    fn test_rejecting_callables() {
        assert!(!takes_identity!(|| 0));
        assert!(!takes_identity!(two));
        assert!(!takes_identity!(|s: &str| s.len()));
        assert!(!takes_identity!(42u8));
    }

    #[test]
    fn test_callable_is_not_invoked() {
        let calls = core::cell::Cell::new(0);
        let counted = |id: Identity| {
            calls.set(calls.get() + 1);
            id
        };
        assert!(takes_identity!(counted));
        assert_eq!(calls.get(), 0);
    }
}
