//! PageCurl Animation
//!
//! Easing curves and eased property transitions.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible timing curves (`ease-in`, `ease-out`, ...)
//! - **Interpolation**: the `Interpolate` trait for scalars and colors
//! - **Transitions**: retargetable single-property transitions driven by `tick`

pub mod easing;
pub mod transition;
pub mod values;

pub use easing::Easing;
pub use transition::Transition;
pub use values::Interpolate;
