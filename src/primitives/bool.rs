//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND
    type And<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type And<Other: Bool> = Other;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type And<Other: Bool> = Absent;
}

/// Conjunction of two type-level booleans.
pub type And<A, B> = <A as Bool>::And<B>;

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Lift a const bool into `Present` / `Absent`.
pub type Lift<const B: bool> = <() as SelectBool<B>>::Out;
