//! `StandardLayout` and `PodCaps` for primitive, core, alloc and std types.
//!
//! The classification table lives in the macros crate
//! (`macros/src/inner/std_types.rs`); tuples up to arity 12 are included.

macros::impl_std_pod_caps!();
