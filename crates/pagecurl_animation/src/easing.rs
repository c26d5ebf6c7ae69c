//! Easing curves
//!
//! The named curves match the CSS timing keywords so a transition played
//! natively looks the same as the one the browser runs from emitted markup.

use std::fmt;

/// Timing function mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// CSS `ease-in`, slow start
    EaseIn,
    /// CSS `ease-out`, slow end
    EaseOut,
}

impl Easing {
    /// Control points of the equivalent cubic Bézier, `None` for linear
    fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
        }
    }

    /// Apply the curve to progress `t` in `0.0..=1.0`
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some(_) if t == 0.0 || t == 1.0 => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_bezier_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Easing::Linear => f.write_str("linear"),
            Easing::EaseIn => f.write_str("ease-in"),
            Easing::EaseOut => f.write_str("ease-out"),
        }
    }
}

/// One coordinate of a unit cubic Bézier with endpoints 0 and 1
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`
///
/// Newton iterations first, bisection when the slope flattens out.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let d = bezier_derivative(s, x1, x2);
        if d.abs() < EPSILON {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let v = bezier(s, x1, x2);
        if (v - x).abs() < EPSILON {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseIn, Easing::EaseOut];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing}");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-5 >= prev, "{easing} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_leads_and_ease_in_lags() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!((Easing::Linear.apply(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_mirrors_ease_out() {
        let a = Easing::EaseIn.apply(0.25);
        let b = Easing::EaseOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_css_names() {
        assert_eq!(Easing::EaseOut.to_string(), "ease-out");
        assert_eq!(Easing::EaseIn.to_string(), "ease-in");
        assert_eq!(Easing::Linear.to_string(), "linear");
    }
}
