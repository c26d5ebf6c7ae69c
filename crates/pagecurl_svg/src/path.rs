//! SVG path data conversion to core paths

use pagecurl_core::{Path, PathCommand, Point};
use usvg::tiny_skia_path::PathSegment;
use usvg::{Options, Tree};

use crate::error::SvgError;

/// Convert usvg path data to a core Path
pub fn usvg_path_to_core(path_data: &usvg::tiny_skia_path::Path) -> Path {
    let mut commands = Vec::new();

    for segment in path_data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                commands.push(PathCommand::MoveTo(Point::new(p.x, p.y)));
            }
            PathSegment::LineTo(p) => {
                commands.push(PathCommand::LineTo(Point::new(p.x, p.y)));
            }
            PathSegment::QuadTo(c, e) => {
                commands.push(PathCommand::QuadTo {
                    control: Point::new(c.x, c.y),
                    end: Point::new(e.x, e.y),
                });
            }
            PathSegment::CubicTo(c1, c2, e) => {
                commands.push(PathCommand::CubicTo {
                    control1: Point::new(c1.x, c1.y),
                    control2: Point::new(c2.x, c2.y),
                    end: Point::new(e.x, e.y),
                });
            }
            PathSegment::Close => {
                commands.push(PathCommand::Close);
            }
        }
    }

    Path::from_commands(commands)
}

/// Parse the contents of an SVG `d` attribute
///
/// The data is wrapped in a minimal document and run through usvg, so every
/// path syntax usvg understands (relative commands, arcs, shorthand curves)
/// comes back as absolute move/line/curve/close commands.
pub fn parse_path_data(d: &str) -> Result<Path, SvgError> {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><path d="{}"/></svg>"#,
        escape_attr(d)
    );

    let options = Options::default();
    let tree = Tree::from_str(&svg, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

    let path = tree
        .root()
        .children()
        .iter()
        .find_map(|node| match node {
            usvg::Node::Path(p) => Some(usvg_path_to_core(p.data())),
            _ => None,
        })
        .ok_or_else(|| SvgError::Parse(format!("no drawable path in {:?}", d)))?;

    tracing::debug!(commands = path.commands().len(), "parsed path data");
    Ok(path)
}

/// Escape a string for use inside a double-quoted XML attribute
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_commands() {
        let path = parse_path_data("M10,10 L90,10 C90,50 50,90 10,90 Z").unwrap();
        let cmds = path.commands();
        assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(10.0, 10.0)));
        assert_eq!(cmds[1], PathCommand::LineTo(Point::new(90.0, 10.0)));
        assert!(matches!(cmds[2], PathCommand::CubicTo { .. }));
        assert!(matches!(cmds.last(), Some(PathCommand::Close)));
    }

    #[test]
    fn test_parse_relative_commands_become_absolute() {
        let path = parse_path_data("M10,10 l20,0 l0,20 z").unwrap();
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(30.0, 30.0)));
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let path = parse_path_data("M-10,-10 L840,-10 L-10,1912 Z").unwrap();
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(-10.0, -10.0)));
        let b = path.bounds();
        assert_eq!(b.x(), -10.0);
        assert_eq!(b.width(), 850.0);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(parse_path_data("").is_err());
    }

    #[test]
    fn test_parsed_path_hit_tests() {
        let path = parse_path_data("M0,0 L100,0 L0,100 Z").unwrap();
        assert!(path.contains(Point::new(20.0, 20.0)));
        assert!(!path.contains(Point::new(80.0, 80.0)));
    }
}
