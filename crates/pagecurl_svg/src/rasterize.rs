//! SVG rasterization using resvg
//!
//! CPU rendering with tiny-skia, used to preview the widget as PNG and to
//! check its composited pixels in tests.

use std::path::Path as FilePath;

use pagecurl_core::Color;
use tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

use crate::error::SvgError;

/// Rasterized SVG image
pub struct RasterizedSvg {
    pixmap: Pixmap,
}

impl RasterizedSvg {
    /// Rasterize an SVG string to the specified size
    ///
    /// The SVG is scaled to fit within the given dimensions while
    /// maintaining aspect ratio, anchored at the top-left corner.
    pub fn from_str(svg_str: &str, width: u32, height: u32) -> Result<Self, SvgError> {
        let tree = parse_tree(svg_str)?;
        Self::from_tree(&tree, width, height)
    }

    /// Rasterize an SVG string at its own declared size
    pub fn from_str_native(svg_str: &str) -> Result<Self, SvgError> {
        let tree = parse_tree(svg_str)?;
        let size = tree.size();
        let width = size.width().ceil() as u32;
        let height = size.height().ceil() as u32;
        Self::from_tree(&tree, width, height)
    }

    /// Rasterize a parsed usvg Tree to the specified size
    pub fn from_tree(tree: &Tree, width: u32, height: u32) -> Result<Self, SvgError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(SvgError::InvalidDimensions { width, height })?;

        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        resvg::render(tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        tracing::debug!(width, height, scale, "rasterized svg");
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Straight-alpha color of one pixel, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, SvgError> {
        self.pixmap
            .encode_png()
            .map_err(|e| SvgError::Encode(e.to_string()))
    }

    /// Encode as PNG and write it to `path`
    pub fn save_png(&self, path: impl AsRef<FilePath>) -> Result<(), SvgError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn parse_tree(svg_str: &str) -> Result<Tree, SvgError> {
    let options = Options::default();
    Tree::from_str(svg_str, &options).map_err(|e| SvgError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
            <rect x="0" y="0" width="12" height="24" fill="red"/>
        </svg>
    "#;

    #[test]
    fn test_rasterize_native_size() {
        let r = RasterizedSvg::from_str_native(RED_SQUARE).unwrap();
        assert_eq!(r.dimensions(), (24, 24));
        assert!(r.pixel(23, 23).is_some());
    }

    #[test]
    fn test_pixels() {
        let r = RasterizedSvg::from_str_native(RED_SQUARE).unwrap();
        assert_eq!(r.pixel(4, 4).unwrap().to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(r.pixel(20, 4).unwrap().to_rgba8()[3], 0);
        assert!(r.pixel(24, 0).is_none());
    }

    #[test]
    fn test_rasterize_scaled() {
        let r = RasterizedSvg::from_str(RED_SQUARE, 48, 48).unwrap();
        assert_eq!(r.pixel(20, 20).unwrap().to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(r.pixel(40, 20).unwrap().to_rgba8()[3], 0);
    }

    #[test]
    fn test_zero_dimensions_error() {
        assert!(RasterizedSvg::from_str(RED_SQUARE, 0, 24).is_err());
        assert!(RasterizedSvg::from_str(RED_SQUARE, 24, 0).is_err());
    }

    #[test]
    fn test_encode_png_signature() {
        let r = RasterizedSvg::from_str_native(RED_SQUARE).unwrap();
        let png = r.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
