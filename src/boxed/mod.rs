//! # Boxing Behind an Interface
//!
//! Construct a value and hand it out as an owned pointer to one of its
//! interfaces: `Box<Child>` becomes `Box<dyn Base>` at the point of
//! construction, so callers never name the concrete type.
//!
//! ```
//! use tola_compat::make_unique_base;
//!
//! trait Shape {
//!     fn area(&self) -> u32;
//! }
//!
//! struct Square(u32);
//!
//! impl Shape for Square {
//!     fn area(&self) -> u32 { self.0 * self.0 }
//! }
//!
//! let shape = make_unique_base!(dyn Shape, Square(3));
//! assert_eq!(shape.area(), 9);
//! ```
//!
//! A child that does not implement the interface is rejected:
//!
//! ```compile_fail
//! use tola_compat::make_unique_base;
//!
//! trait Shape {}
//! struct Circle;
//!
//! let _ = make_unique_base!(dyn Shape, Circle);
//! ```

#[doc(hidden)]
pub use alloc::boxed::Box;

/// Box `child` as a `Box<Base>`.
///
/// `Base` is any type `Child` unsizes to: a trait object the child
/// implements (with or without auto-trait markers such as `+ Send`), a slice
/// for an array child, or the child's own type.
///
/// ```
/// use tola_compat::make_unique_base;
///
/// let nums = make_unique_base!([u8], [1, 2, 3]);
/// assert_eq!(nums.len(), 3);
///
/// let shown = make_unique_base!(dyn core::fmt::Display + Send, 7);
/// assert_eq!(shown.to_string(), "7");
/// ```
#[macro_export]
macro_rules! make_unique_base {
    ($Base:ty, $child:expr $(,)?) => {{
        let boxed: $crate::boxed::Box<$Base> = $crate::boxed::Box::new($child);
        boxed
    }};
}
