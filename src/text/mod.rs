//! # Stringification
//!
//! Produce the text of a value, preferring the native conversion
//! (`ToString`, available whenever the type is `Display`) and falling back
//! to writing its `Debug` form into a fresh buffer.
//!
//! Exactly one path is chosen per type, at compile time:
//!
//! | Type has | Path | Output |
//! |----------|------|--------|
//! | `Display` | native | `value.to_string()` |
//! | `Debug` only | format | `format!("{value:?}")` |
//! | neither | - | compile error |
//!
//! ```
//! use tola_compat::to_string;
//!
//! assert_eq!(to_string!(42), "42");
//! assert_eq!(to_string!(-7), "-7");
//! assert_eq!(to_string!(Some(3)), "Some(3)");
//! ```
//!
//! A type with neither conversion is rejected:
//!
//! ```compile_fail
//! use tola_compat::to_string;
//!
//! struct Opaque;
//! let _ = to_string!(Opaque);
//! ```
//!
//! In generic code, bound the parameter on [`TextCaps`] and call
//! [`to_string()`]; the selection is still made once per type.

mod std_impls;

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{Debug, Display};

use crate::primitives::Bool;
use crate::specialize::{BoolMethodCall, MethodImpl};

// =============================================================================
// Capability Witness
// =============================================================================

/// Whether a type has a native text conversion, as a type-level boolean.
///
/// Implemented for the primitive and std types; use `#[derive(TextCaps)]`
/// for your own.
pub trait TextCaps {
    /// `Present` when the type is `Display`.
    type Native: Bool;
}

// =============================================================================
// The Two Implementations
// =============================================================================

/// Native path: the standard `ToString` conversion.
pub struct NativeText;

/// Fallback path: `Debug` written into a fresh `String`.
pub struct FormatText;

impl<T: ?Sized + Display> MethodImpl<T, String> for NativeText {
    #[inline]
    fn call(value: &T) -> String {
        value.to_string()
    }
}

impl<T: ?Sized + Debug> MethodImpl<T, String> for FormatText {
    #[inline]
    fn call(value: &T) -> String {
        format!("{value:?}")
    }
}

/// Text of `value`, through the path `T::Native` selects.
///
/// ```
/// use tola_compat::text::{to_string, TextCaps};
///
/// fn label<T: TextCaps>(value: T) -> String
/// where
///     T::Native: tola_compat::specialize::BoolMethodCall<
///         tola_compat::text::NativeText,
///         tola_compat::text::FormatText,
///         T,
///         String,
///     >,
/// {
///     to_string(value)
/// }
///
/// assert_eq!(label(i64::MIN), "-9223372036854775808");
/// assert_eq!(label(vec!['a']), "['a']");
/// ```
#[inline]
pub fn to_string<T>(value: T) -> String
where
    T: TextCaps,
    T::Native: BoolMethodCall<NativeText, FormatText, T, String>,
{
    <T::Native as BoolMethodCall<NativeText, FormatText, T, String>>::call(&value)
}

// =============================================================================
// Autoref Check (concrete types, no TextCaps needed)
// =============================================================================

/// Wrapper for autoref-based specialization.
#[doc(hidden)]
pub struct TextCheck<'a, T: ?Sized>(pub &'a T);

/// Higher-priority candidate: found at the first autoref step.
#[doc(hidden)]
pub trait ViaNative {
    fn __to_text(&self) -> String;
}

impl<T: ?Sized + Display> ViaNative for TextCheck<'_, T> {
    #[inline]
    fn __to_text(&self) -> String {
        <NativeText as MethodImpl<T, String>>::call(self.0)
    }
}

/// Lower-priority candidate: only reached when `ViaNative` does not apply.
#[doc(hidden)]
pub trait ViaFormat {
    fn __to_text(&self) -> String;
}

impl<T: ?Sized + Debug> ViaFormat for &TextCheck<'_, T> {
    #[inline]
    fn __to_text(&self) -> String {
        <FormatText as MethodImpl<T, String>>::call(self.0)
    }
}

/// Text of a value, native conversion first.
///
/// Works for any concrete type, and for type parameters whose bounds name
/// `Display` or `Debug`. Borrows its argument.
///
/// ```
/// use tola_compat::to_string;
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string!(u8::MAX), "255");
/// assert_eq!(to_string!("as is"), "as is");
/// assert_eq!(to_string!(Point { x: 1, y: -2 }), "Point { x: 1, y: -2 }");
/// ```
#[macro_export]
macro_rules! to_string {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::text::{ViaFormat as _, ViaNative as _};
        (&$crate::text::TextCheck(&$value)).__to_text()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq)]
    struct DebugOnly {
        id: u32,
    }

    impl TextCaps for DebugOnly {
        type Native = crate::primitives::Absent;
    }

    struct Both;

    impl Display for Both {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("display")
        }
    }

    impl Debug for Both {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("debug")
        }
    }

    #[test]
    fn test_native_integers() {
        assert_eq!(to_string(0i32), "0");
        assert_eq!(to_string(42), "42");
        assert_eq!(to_string(-7), "-7");
        assert_eq!(to_string(i32::MIN), i32::MIN.to_string());
        assert_eq!(to_string(i32::MAX), i32::MAX.to_string());
        assert_eq!(to_string(u64::MAX), "18446744073709551615");
        assert_eq!(to_string(i128::MIN), i128::MIN.to_string());
    }

    #[test]
    fn test_native_other_primitives() {
        assert_eq!(to_string(1.5f64), "1.5");
        assert_eq!(to_string(true), "true");
        assert_eq!(to_string('q'), "q");
        assert_eq!(to_string("slice"), "slice");
        assert_eq!(to_string(String::from("owned")), "owned");
    }

    #[test]
    fn test_format_fallback() {
        assert_eq!(to_string(vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(to_string(Option::<u8>::None), "None");
        assert_eq!(to_string((1, "a")), "(1, \"a\")");
        let value = DebugOnly { id: 3 };
        assert_eq!(to_string(value.clone()), format!("{value:?}"));
    }

    struct Failing;

    impl Debug for Failing {
        fn fmt(&self, _: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            Err(core::fmt::Error)
        }
    }

    impl TextCaps for Failing {
        type Native = crate::primitives::Absent;
    }

    #[test]
    #[should_panic(expected = "formatting trait implementation returned an error")]
    fn test_failing_debug_is_not_truncated() {
        // Same contract as `ToString`: no partial text.
        let _ = to_string(Failing);
    }

    #[test]
    fn test_references_inherit() {
        let n = 5u16;
        assert_eq!(to_string(&n), "5");
        assert_eq!(to_string(&&n), "5");
        let v: Vec<u8> = vec![];
        assert_eq!(to_string(&v), "[]");
    }

    #[test]
    fn test_macro_prefers_native() {
        assert_eq!(to_string!(Both), "display");
        assert_eq!(to_string!(DebugOnly { id: 1 }), "DebugOnly { id: 1 }");
        assert_eq!(to_string!(-0i8), "0");
    }

    #[test]
    fn test_macro_in_generic_context() {
        fn shown<T: Display>(value: T) -> String {
            to_string!(value)
        }
        fn debugged<T: Debug>(value: T) -> String {
            to_string!(value)
        }
        assert_eq!(shown(Both), "display");
        assert_eq!(debugged(Both), "debug");
    }

    #[test]
    fn test_repeatable() {
        assert_eq!(to_string(-13), to_string(-13));
        assert_eq!(to_string!([1u8; 2]), to_string!([1u8; 2]));
    }
}
