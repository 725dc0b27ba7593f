// Internal macros, invoked only from tola-compat itself
//
// - std_types: StandardLayout / PodCaps / TextCaps for std types
// - tuple_apply: Apply impls per tuple arity

pub mod std_types;
pub mod tuple_apply;
