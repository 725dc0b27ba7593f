//! # Plain Old Data Classification
//!
//! A type is POD when it is both **trivially copyable** (`Copy`: a bitwise
//! copy is a complete copy and nothing runs on drop) and **standard layout**
//! (its in-memory representation is fixed by the language rather than left
//! to the compiler).
//!
//! Three ways to ask:
//!
//! | Surface | Works for | Result |
//! |---------|-----------|--------|
//! | `is_pod!(T)` | any concrete type | `bool` (const) |
//! | `is_pod::<T>()` | `T: PodCaps`, generic code included | `bool` (const fn) |
//! | `IsPod<T>` | `T: PodCaps` | `Present` / `Absent` for type-level dispatch |
//!
//! ```
//! use tola_compat::is_pod;
//!
//! assert!(is_pod!(i32));
//! assert!(!is_pod!(String));
//!
//! fn gate<T: tola_compat::pod::PodCaps>() -> bool {
//!     is_pod::<T>()
//! }
//! assert!(gate::<[u16; 8]>());
//! assert!(!gate::<(u16, u16)>());
//! ```
//!
//! ## Predicate selection
//!
//! With the `conjunction` feature (default) the answer is the conjunction
//! `StandardLayout AND TriviallyCopyable`. Without it the single `Pod`
//! predicate is consulted. Both are kept in agreement by construction.

mod std_impls;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "conjunction")]
use crate::primitives::And;
use crate::primitives::Bool;
#[cfg(feature = "alloc")]
use crate::specialize::{BoolMethodCall, MethodImpl};

// =============================================================================
// Marker Traits
// =============================================================================

/// Types whose memory layout is fixed by the language.
///
/// Implemented for primitives, thin pointers, arrays of standard-layout
/// elements and `#[repr(C)]` / `#[repr(transparent)]` wrappers. Use
/// `#[derive(StandardLayout)]` for your own types.
///
/// # Safety
///
/// The implementor must have a defined layout: a primitive, a
/// `#[repr(C)]` / `#[repr(transparent)]` aggregate of standard-layout
/// fields, or an enum with a primitive or `C` representation.
pub unsafe trait StandardLayout {}

/// The single-predicate form: `Copy + StandardLayout`.
///
/// Blanket-implemented; never implement it by hand.
///
/// # Safety
///
/// Same contract as [`StandardLayout`].
pub unsafe trait Pod: Copy + StandardLayout {}

unsafe impl<T: Copy + StandardLayout> Pod for T {}

// =============================================================================
// Type-level Classification
// =============================================================================

/// Layout capabilities of a type, as type-level booleans.
///
/// Unlike the marker traits, every implementor answers both ways, so a
/// `T: PodCaps` bound is enough to branch on POD-ness in generic code.
/// Use `#[derive(PodCaps)]` for your own types.
///
/// Generic types opt in to copyability with `#[pod_caps(copy)]`, which
/// follows the bounds of `#[derive(Copy)]`: copyable when every type
/// parameter and every field is.
///
/// ```
/// use tola_compat::{is_pod, PodCaps, StandardLayout};
///
/// #[derive(Clone, Copy, StandardLayout, PodCaps)]
/// #[repr(transparent)]
/// #[pod_caps(copy)]
/// struct Meters<T>(T);
///
/// assert!(is_pod::<Meters<u32>>());
/// assert!(!is_pod::<Meters<String>>());
/// ```
///
/// The opt-in is checked against a real `Copy` impl:
///
/// ```compile_fail
/// use tola_compat::PodCaps;
///
/// #[derive(Clone, PodCaps)]
/// #[repr(C)]
/// #[pod_caps(copy)]
/// struct NotCopy<T>(T);
/// ```
pub trait PodCaps {
    /// `Present` when the layout is fixed by the language.
    type StandardLayout: Bool;
    /// `Present` when the type is `Copy`.
    type TriviallyCopyable: Bool;
    /// The single-predicate answer; always equals the conjunction of the two above.
    type Pod: Bool;
}

/// POD-ness of `T` as `Present` / `Absent`.
#[cfg(feature = "conjunction")]
pub type IsPod<T> = And<<T as PodCaps>::StandardLayout, <T as PodCaps>::TriviallyCopyable>;

/// POD-ness of `T` as `Present` / `Absent`.
#[cfg(not(feature = "conjunction"))]
pub type IsPod<T> = <T as PodCaps>::Pod;

/// Whether `T` is plain old data.
///
/// Resolved at compile time; usable in `const` items.
#[inline(always)]
pub const fn is_pod<T: PodCaps + ?Sized>() -> bool {
    <IsPod<T> as Bool>::VALUE
}

// =============================================================================
// Check for Concrete Types
// =============================================================================

/// Check whether a concrete type is plain old data, without requiring a
/// `PodCaps` impl.
///
/// ```
/// use tola_compat::is_pod;
///
/// #[derive(Clone, Copy)]
/// struct Unordered { a: u8, b: u32 }
///
/// const INT: bool = is_pod!(u64);
/// assert!(INT);
/// assert!(is_pod!(*const u8));
/// // Default repr: copyable, but the layout is up to the compiler.
/// assert!(!is_pod!(Unordered));
/// ```
///
/// **Note**: Only works for concrete types. For a type parameter use
/// [`is_pod`](crate::pod::is_pod) with a `PodCaps` bound.
#[macro_export]
macro_rules! is_pod {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::{CopyFallback, PodFallback, StandardLayoutFallback};
        $crate::__pod_check!($T)
    }};
}

#[cfg(feature = "conjunction")]
#[doc(hidden)]
#[macro_export]
macro_rules! __pod_check {
    ($T:ty) => {
        $crate::detect::Detect::<$T>::IS_STANDARD_LAYOUT && $crate::detect::Detect::<$T>::IS_COPY
    };
}

#[cfg(not(feature = "conjunction"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __pod_check {
    ($T:ty) => {
        $crate::detect::Detect::<$T>::IS_POD
    };
}

// =============================================================================
// POD-gated Copy
// =============================================================================

/// Bitwise copy path, taken for POD element types.
#[cfg(feature = "alloc")]
pub struct BitwiseCopy;

/// Element-wise `Clone` path, taken for everything else.
#[cfg(feature = "alloc")]
pub struct ElementClone;

#[cfg(feature = "alloc")]
impl<T: Copy> MethodImpl<[T], Vec<T>> for BitwiseCopy {
    #[inline]
    fn call(value: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(value.len());
        // SAFETY: `out` has room for `value.len()` elements, the buffers are
        // distinct allocations, and `T: Copy` makes the bitwise copy a valid value.
        unsafe {
            core::ptr::copy_nonoverlapping(value.as_ptr(), out.as_mut_ptr(), value.len());
            out.set_len(value.len());
        }
        out
    }
}

#[cfg(feature = "alloc")]
impl<T: Clone> MethodImpl<[T], Vec<T>> for ElementClone {
    #[inline]
    fn call(value: &[T]) -> Vec<T> {
        value.iter().cloned().collect()
    }
}

/// Copy a slice into a new `Vec`, with one `memcpy` when `T` is POD and
/// one `clone()` per element otherwise.
///
/// ```
/// use tola_compat::pod::clone_to_vec;
///
/// assert_eq!(clone_to_vec(&[1u32, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(clone_to_vec(&[String::from("a")]), vec![String::from("a")]);
/// ```
#[cfg(feature = "alloc")]
#[inline]
pub fn clone_to_vec<T>(src: &[T]) -> Vec<T>
where
    T: PodCaps + Clone,
    IsPod<T>: BoolMethodCall<BitwiseCopy, ElementClone, [T], Vec<T>>,
{
    <IsPod<T> as BoolMethodCall<BitwiseCopy, ElementClone, [T], Vec<T>>>::call(src)
}
