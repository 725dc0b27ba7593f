#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "nightly", feature(fn_traits))]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std
// - conjunction: POD = StandardLayout AND TriviallyCopyable (else single Pod predicate)
// - nightly: owned-tuple apply delegates to FnOnce::call_once

//! # tola-compat
//!
//! **Compile-time compatibility shims.**
//!
//! Three independent facilities, all resolved during type checking:
//!
//! | Facility | Question | Entry points |
//! |----------|----------|--------------|
//! | POD classification | Is `T` trivially copyable *and* standard layout? | [`is_pod!`], [`pod::is_pod`], [`pod::IsPod`] |
//! | Tuple application | Call `f` with a tuple's elements as arguments | [`apply()`], [`const_apply!`] |
//! | Stringification | Text for a value, native conversion first | [`to_string!`], [`text::to_string`] |
//!
//! Two small helpers sit beside them: [`make_unique_base!`] boxes a value
//! behind one of its interfaces, and [`takes_identity!`] asks whether a
//! callable accepts [`apply::identity::Identity`].
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present / Absent), And, Lift<const B>                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Checks and Dispatch                                     |
//! |  - Detect<T> (inherent const fallback)                            |
//! |  - MethodImpl, BoolMethodCall (exactly one branch per type)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Shims                                                   |
//! |  - pod (PodCaps, is_pod!), apply (Apply), text (TextCaps)         |
//! |  - boxed (make_unique_base!), apply::identity (takes_identity!)  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_compat::prelude::*;
//!
//! assert!(is_pod!(i32));
//! assert!(!is_pod!(String));
//!
//! let len_sum = apply(|n: usize, s: &str| n + s.len(), (3, "x"));
//! assert_eq!(len_sum, 4);
//!
//! assert_eq!(to_string!(42), "42");
//! assert_eq!(to_string!(vec![1, 2]), "[1, 2]");
//! ```

// Allow `::tola_compat` to work inside the crate itself
extern crate self as tola_compat;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for generated check names
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Checks and Dispatch
// =============================================================================
pub mod detect;
pub mod specialize;

// =============================================================================
// Layer 2: Shims
// =============================================================================
pub mod apply;
#[cfg(feature = "alloc")]
pub mod boxed;
pub mod pod;
#[cfg(feature = "alloc")]
pub mod text;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use apply::{apply, Apply, Identity};
pub use pod::{is_pod, IsPod, Pod, PodCaps, StandardLayout};
pub use primitives::bool::{Absent, Bool, Present};
#[cfg(feature = "alloc")]
pub use text::{to_string, TextCaps};

// Re-export proc-macros (the derives share their trait's name)
pub use macros::{const_apply, PodCaps, StandardLayout};
#[cfg(feature = "alloc")]
pub use macros::TextCaps;

/// Common items for the shims.
pub mod prelude {
    pub use crate::apply::{apply, Apply};
    pub use crate::pod::{IsPod, Pod};
    pub use crate::primitives::{Absent, Bool, Present};
    // Trait and derive together
    pub use crate::{PodCaps, StandardLayout};
    #[cfg(feature = "alloc")]
    pub use crate::TextCaps;
    pub use macros::const_apply;
    // Note: is_pod!, to_string!, takes_identity!, make_unique_base! are #[macro_export] so they're at crate root.
    // Importing the root name brings the macro and the function of the same name.
    pub use crate::is_pod;
    pub use crate::takes_identity;
    #[cfg(feature = "alloc")]
    pub use crate::{make_unique_base, to_string};
}
