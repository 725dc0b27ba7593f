//! # Layer 1: Capability Checks
//!
//! Compile-time detection of the handful of traits the shims dispatch on.
//! Every check is a pure type-level query: nothing is executed, and a
//! failed check falls back to `false` instead of erroring.
//!
//! ```
//! use tola_compat::detect::{Detect, CopyFallback, DisplayFallback};
//!
//! assert!(Detect::<i32>::IS_COPY);
//! assert!(!Detect::<String>::IS_COPY);
//! assert!(Detect::<String>::IS_DISPLAY);
//! assert!(!Detect::<Vec<u8>>::IS_DISPLAY);
//! ```

pub mod autoref;

pub use autoref::{CopyFallback, Detect, DisplayFallback, PodFallback, StandardLayoutFallback};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_copy() {
        assert!(Detect::<u64>::IS_COPY);
        assert!(Detect::<&str>::IS_COPY);
        assert!(!Detect::<&mut u8>::IS_COPY);
        assert!(!Detect::<std::string::String>::IS_COPY);
    }

    #[test]
    fn test_detect_text() {
        assert!(Detect::<i8>::IS_DISPLAY);
        assert!(Detect::<str>::IS_DISPLAY);
        assert!(!Detect::<[u8; 2]>::IS_DISPLAY);
        assert!(!Detect::<dyn core::fmt::Debug>::IS_DISPLAY);
    }

    #[test]
    fn test_detect_layout() {
        assert!(Detect::<u32>::IS_STANDARD_LAYOUT);
        assert!(Detect::<[f32; 4]>::IS_STANDARD_LAYOUT);
        assert!(!Detect::<(u8, u8)>::IS_STANDARD_LAYOUT);
        assert!(Detect::<u32>::IS_POD);
        assert!(!Detect::<core::cell::Cell<u32>>::IS_POD);
    }
}
