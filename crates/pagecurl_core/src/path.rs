//! Vector paths
//!
//! A `Path` is a flat list of move/line/curve/close commands, the form the
//! SVG parser produces. Hit testing flattens the curves through lyon and
//! applies the nonzero fill rule, which is what a browser uses for a
//! `clipPath` without an explicit `clip-rule`.

use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::point;
use lyon::path::{FillRule, Path as LyonPath};

use crate::geometry::{Point, Rect};

/// Flattening tolerance used by [`Path::contains`], in path units
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a path from a vector of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounding rectangle of all points, control points included
    pub fn bounds(&self) -> Rect {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::QuadTo { control, end } => {
                    include(control);
                    include(end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }

    /// Nonzero-winding point-in-path test
    pub fn contains(&self, p: Point) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let lyon_path = self.to_lyon();
        hit_test_path(
            &point(p.x, p.y),
            lyon_path.iter(),
            FillRule::NonZero,
            DEFAULT_TOLERANCE,
        )
    }

    /// Convert to a lyon path, opening and closing subpaths the way SVG does
    fn to_lyon(&self) -> LyonPath {
        let mut builder = LyonPath::builder();
        let mut open = false;
        let mut subpath_start = Point::ZERO;
        let mut current = Point::ZERO;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(point(p.x, p.y));
                    open = true;
                    subpath_start = *p;
                    current = *p;
                }
                PathCommand::LineTo(p) => {
                    if !open {
                        builder.begin(point(current.x, current.y));
                        open = true;
                    }
                    builder.line_to(point(p.x, p.y));
                    current = *p;
                }
                PathCommand::QuadTo { control, end } => {
                    if !open {
                        builder.begin(point(current.x, current.y));
                        open = true;
                    }
                    builder.quadratic_bezier_to(point(control.x, control.y), point(end.x, end.y));
                    current = *end;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    if !open {
                        builder.begin(point(current.x, current.y));
                        open = true;
                    }
                    builder.cubic_bezier_to(
                        point(control1.x, control1.y),
                        point(control2.x, control2.y),
                        point(end.x, end.y),
                    );
                    current = *end;
                }
                PathCommand::Close => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                    // A command after close starts from the subpath's first point
                    current = subpath_start;
                }
            }
        }

        if open {
            builder.end(false);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Path {
        Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .line_to(0.0, 100.0)
            .close()
    }

    #[test]
    fn test_contains_triangle() {
        let path = triangle();
        assert!(path.contains(Point::new(10.0, 10.0)));
        assert!(path.contains(Point::new(40.0, 40.0)));
        assert!(!path.contains(Point::new(60.0, 60.0)));
        assert!(!path.contains(Point::new(-5.0, 10.0)));
    }

    #[test]
    fn test_contains_curve() {
        // Bulging curve from (0,0) to (100,0) through roughly y = 75
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(Point::ZERO),
            PathCommand::CubicTo {
                control1: Point::new(0.0, 100.0),
                control2: Point::new(100.0, 100.0),
                end: Point::new(100.0, 0.0),
            },
            PathCommand::Close,
        ]);
        assert!(path.contains(Point::new(50.0, 50.0)));
        assert!(!path.contains(Point::new(50.0, 90.0)));
    }

    #[test]
    fn test_unclosed_path_is_filled() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .line_to(0.0, 100.0);
        assert!(path.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_empty_path_contains_nothing() {
        assert!(!Path::new().contains(Point::ZERO));
    }

    #[test]
    fn test_bounds() {
        let b = triangle().bounds();
        assert_eq!(b, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(Path::new().bounds(), Rect::ZERO);
    }
}
