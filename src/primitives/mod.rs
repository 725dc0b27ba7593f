//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent) and the
//!   conjunction every compound predicate in this crate is built from.

pub mod bool;

// Re-export key types at this level
pub use bool::{Absent, And, Bool, Lift, Present, SelectBool};
