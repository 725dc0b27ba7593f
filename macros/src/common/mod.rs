// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - repr: `#[repr(..)]` inspection for layout decisions
// - type_bool: Type-level boolean expressions and crate paths

mod repr;
mod type_bool;

pub use repr::*;
pub use type_bool::*;
