// User-facing macros
//
// - layout: #[derive(StandardLayout)], #[derive(PodCaps)]
// - text_caps: #[derive(TextCaps)]
// - const_apply: const_apply!(N; f, tuple)

pub mod const_apply;
pub mod layout;
pub mod text_caps;

pub use const_apply::{expand_const_apply, ConstApplyInput};
pub use layout::{expand_derive_pod_caps, expand_derive_standard_layout};
pub use text_caps::expand_derive_text_caps;
