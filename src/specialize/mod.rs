//! # Layer 2: Specialization Sugar
//!
//! Stable-Rust replacements for impl specialization.
//!
//! ## Module Structure
//!
//! ```text
//! specialize/
//! └── dispatch.rs - Type-level dispatch (MethodImpl, BoolMethodCall)
//! ```
//!
//! The concrete-type counterpart lives in `detect` (inherent const
//! fallback) and in the autoref checks behind `to_string!`.

pub mod dispatch;

pub use dispatch::{BoolMethodCall, MethodImpl};
