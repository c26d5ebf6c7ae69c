//! Core geometry types
//!
//! Points, sizes and rectangles in logical pixels (or view-box units), plus
//! the 2D affine transform used for the container's hover scale.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height divided by width, or zero for a degenerate width
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0.0 {
            0.0
        } else {
            self.height / self.width
        }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Scale around the origin (0, 0)
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            elements: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Scale around an arbitrary origin point
    ///
    /// Equivalent to `translate(o) * scale(s) * translate(-o)`, so the origin
    /// stays fixed while everything else grows away from it.
    pub fn scale_about(sx: f32, sy: f32, origin: Point) -> Self {
        let tx = origin.x * (1.0 - sx);
        let ty = origin.y * (1.0 - sy);
        Self {
            elements: [sx, 0.0, 0.0, sy, tx, ty],
        }
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(
            a * point.x + c * point.y + tx,
            b * point.x + d * point.y + ty,
        )
    }

    /// Inverse transform, or `None` when the matrix is singular
    /// (e.g. a zero scale)
    pub fn inverse(&self) -> Option<Affine2D> {
        let [a, b, c, d, tx, ty] = self.elements;
        let det = a * d - b * c;
        if det.abs() < f32::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine2D {
            elements: [
                d * inv,
                -b * inv,
                -c * inv,
                a * inv,
                (c * ty - d * tx) * inv,
                (b * tx - a * ty) * inv,
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_scale_about_origin_keeps_origin_fixed() {
        let t = Affine2D::scale_about(1.15, 1.15, Point::ZERO);
        assert_eq!(t.transform_point(Point::ZERO), Point::ZERO);
        assert!(approx(
            t.transform_point(Point::new(100.0, 200.0)),
            Point::new(115.0, 230.0)
        ));
    }

    #[test]
    fn test_scale_about_center() {
        let t = Affine2D::scale_about(2.0, 2.0, Point::new(10.0, 10.0));
        assert!(approx(
            t.transform_point(Point::new(10.0, 10.0)),
            Point::new(10.0, 10.0)
        ));
        assert!(approx(
            t.transform_point(Point::new(20.0, 10.0)),
            Point::new(30.0, 10.0)
        ));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Affine2D::scale_about(2.0, 4.0, Point::new(5.0, -3.0));
        let inv = t.inverse().unwrap();
        let p = Point::new(7.0, 11.0);
        assert!(approx(inv.transform_point(t.transform_point(p)), p));
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Affine2D::scale(0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(0.0, 0.0, 830.0, 1903.0);
        assert!(r.contains(Point::ZERO));
        assert!(r.contains(Point::new(830.0, 1903.0)));
        assert!(!r.contains(Point::new(-0.5, 10.0)));
    }

    #[test]
    fn test_aspect_ratio() {
        let s = Size::new(830.0, 1903.0);
        assert!((s.aspect_ratio() - 1903.0 / 830.0).abs() < 1e-6);
        assert_eq!(Size::ZERO.aspect_ratio(), 0.0);
    }
}
