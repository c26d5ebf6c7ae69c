//! Corner geometry
//!
//! The one path that defines both what is painted and what is clickable.
//! Everything that needs the corner shape goes through [`CORNER_PATH`] or
//! [`corner_path`], never through a copy of its coordinates.

use std::sync::OnceLock;

use pagecurl_core::{Affine2D, Path, Point, Rect, Size};

/// Corner silhouette in view-box units
///
/// Starts 10 units outside the top and left edges so scaled rendering never
/// shows a hairline gap along the screen border.
pub const CORNER_PATH: &str = "M-10,-10 L840,-10 L830,0 C793.67,1.34 759.67,6.54 723.34,21.78 L723.06,21.88 C714.47,26.48 706.03,30.5 697.44,35.1 L696.81,35.45 C689.53,39.23 682.53,44.01 675.25,48.79 C656.32,61.2 642.21,85.74 632.43,106.11 L632.35,106.29 L621.95,131.78 L630.63,130.97 L303.76,860.27 C175.46,1155.31 39.67,1583.39 0,1902.06 L-10,1912 L-10,-10 Z";

pub const VIEW_BOX_WIDTH: f32 = 830.0;
pub const VIEW_BOX_HEIGHT: f32 = 1903.0;

/// `viewBox` attribute value
pub const VIEW_BOX_ATTR: &str = "0 0 830 1903";

pub fn view_box() -> Rect {
    Rect::new(0.0, 0.0, VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT)
}

/// Height over width of the corner's coordinate space
pub fn aspect_ratio() -> f32 {
    Size::new(VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT).aspect_ratio()
}

/// Size of the widget displayed `width` pixels wide
pub fn display_size(width: f32) -> Size {
    Size::new(width, width * aspect_ratio())
}

/// [`CORNER_PATH`] parsed into path commands, cached for the process
pub fn corner_path() -> &'static Path {
    static PATH: OnceLock<Path> = OnceLock::new();
    PATH.get_or_init(|| {
        pagecurl_svg::parse_path_data(CORNER_PATH).unwrap_or_else(|err| {
            tracing::error!(%err, "corner path failed to parse, hit region will be empty");
            Path::new()
        })
    })
}

/// Whether a point in view-box units lies in the clickable corner
///
/// The hit rectangle spans the view box and is clipped by the corner path,
/// so the 10-unit overhang outside the view box never receives events.
pub fn hit_test(point: Point) -> bool {
    view_box().contains(point) && corner_path().contains(point)
}

/// Map a screen position into view-box units
///
/// `container_transform` is the transform currently applied to the fixed
/// container (its hover scale). Returns `None` for degenerate sizes or
/// non-invertible transforms.
pub fn screen_to_view_box(
    screen: Point,
    width: f32,
    container_transform: &Affine2D,
) -> Option<Point> {
    if !(width > 0.0) {
        return None;
    }
    let local = container_transform.inverse()?.transform_point(screen);
    let units_per_px = VIEW_BOX_WIDTH / width;
    Some(Point::new(local.x * units_per_px, local.y * units_per_px))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecurl_core::PathCommand;

    #[test]
    fn test_corner_path_parses() {
        let path = corner_path();
        assert!(!path.is_empty());
        assert_eq!(
            path.commands()[0],
            PathCommand::MoveTo(Point::new(-10.0, -10.0))
        );
        assert!(matches!(path.commands().last(), Some(PathCommand::Close)));
    }

    #[test]
    fn test_corner_path_overhangs_view_box() {
        let b = corner_path().bounds();
        assert_eq!(b.x(), -10.0);
        assert_eq!(b.y(), -10.0);
        assert_eq!(b.x() + b.width(), 840.0);
        assert_eq!(b.y() + b.height(), 1912.0);
    }

    #[test]
    fn test_display_size_preserves_aspect_ratio() {
        for width in [1.0, 48.0, 72.0, 100.0, 333.3] {
            let s = display_size(width);
            assert_eq!(s.width, width);
            assert!((s.height / s.width - 1903.0 / 830.0).abs() < 1e-5);
        }
        assert!((display_size(100.0).height - 229.277).abs() < 1e-2);
    }

    #[test]
    fn test_hit_test_inside_wedge() {
        assert!(hit_test(Point::new(5.0, 5.0)));
        assert!(hit_test(Point::new(100.0, 100.0)));
        assert!(hit_test(Point::new(400.0, 400.0)));
        assert!(hit_test(Point::new(50.0, 1500.0)));
    }

    #[test]
    fn test_hit_test_outside_wedge() {
        assert!(!hit_test(Point::new(600.0, 600.0)));
        assert!(!hit_test(Point::new(800.0, 1800.0)));
        assert!(!hit_test(Point::new(700.0, 200.0)));
    }

    #[test]
    fn test_overhang_is_not_clickable() {
        assert!(corner_path().contains(Point::new(-5.0, 100.0)));
        assert!(!hit_test(Point::new(-5.0, 100.0)));
    }

    #[test]
    fn test_screen_to_view_box() {
        let p = screen_to_view_box(Point::new(10.0, 20.0), 83.0, &Affine2D::IDENTITY).unwrap();
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!((p.y - 200.0).abs() < 1e-3);

        let scaled = Affine2D::scale_about(2.0, 2.0, Point::ZERO);
        let p = screen_to_view_box(Point::new(10.0, 20.0), 83.0, &scaled).unwrap();
        assert!((p.x - 50.0).abs() < 1e-3);
        assert!((p.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_screen_to_view_box_degenerate() {
        assert!(screen_to_view_box(Point::ZERO, 0.0, &Affine2D::IDENTITY).is_none());
        assert!(screen_to_view_box(Point::ZERO, -5.0, &Affine2D::IDENTITY).is_none());
        assert!(screen_to_view_box(Point::ZERO, 72.0, &Affine2D::scale(0.0, 0.0)).is_none());
    }
}
