//! Values a [`Transition`](crate::Transition) can carry
//!
//! The widget animates two properties: its scale (a scalar) and its fill
//! (a color). Both blend linearly; the easing curve shapes the factor.

use pagecurl_core::Color;

/// A value with a straight-line blend between two endpoints
pub trait Interpolate: Clone {
    /// Blend toward `other`; `t = 0` is `self`, `t = 1` is `other`
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Whether two values are within `epsilon` of each other
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    /// Largest per-channel difference, alpha included
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        let channels = [
            self.r - other.r,
            self.g - other.g,
            self.b - other.b,
            self.a - other.a,
        ];
        channels.iter().all(|d| d.abs() < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_blend() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((1.0_f32.lerp(&1.15, 1.0) - 1.15).abs() < 1e-6);
        assert!(1.0_f32.approx_eq(&1.0005, 1e-3));
        assert!(!1.0_f32.approx_eq(&1.15, 1e-3));
    }

    #[test]
    fn test_color_blend() {
        let quarter = Color::BLACK.lerp(&Color::WHITE, 0.25);
        assert!(quarter.approx_eq(&Color::rgb(0.25, 0.25, 0.25), 1e-6));
        assert!(!Color::BLACK.approx_eq(&Color::BLACK.with_alpha(0.5), 1e-3));
    }
}
