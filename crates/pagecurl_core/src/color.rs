//! RGBA colors
//!
//! Colors are stored as straight-alpha floats in `0.0..=1.0`. Parsing accepts
//! CSS color values; see [`Color::parse`].

use std::fmt;
use std::str::FromStr;

use crate::css_color::parse_css_color;
use crate::error::CoreError;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse a CSS color string
    ///
    /// Hex notation, `rgb()`/`rgba()`, `hsl()`/`hsla()` (comma or space
    /// separated, optional `/ alpha`), the CSS named colors and
    /// `transparent`.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        parse_css_color(input).ok_or_else(|| CoreError::InvalidColor(input.to_string()))
    }

    /// CSS hex notation, `#rrggbb` when opaque and `#rrggbbaa` otherwise
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let c = Color::parse("#1c1917").unwrap();
        assert_eq!(c.to_rgba8(), [0x1c, 0x19, 0x17, 255]);
        assert_eq!(c.to_hex_string(), "#1c1917");
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#0008").unwrap().to_rgba8(), [0, 0, 0, 0x88]);
    }

    #[test]
    fn test_parse_rgba_function() {
        let c = Color::parse("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(c.to_rgba8(), [0, 0, 0, 128]);
        let c = Color::parse("rgb(255, 128, 0)").unwrap();
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(Color::parse("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(Color::parse("red").unwrap().to_hex_string(), "#ff0000");
        assert_eq!(Color::parse("rebeccapurple").unwrap().to_hex_string(), "#663399");
    }

    #[test]
    fn test_parse_modern_syntax() {
        assert_eq!(Color::parse("rgb(255 0 0)").unwrap().to_hex_string(), "#ff0000");
        assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap().to_hex_string(), "#ff0000");
        assert_eq!(Color::parse("rgb(0 0 0 / 50%)").unwrap().to_rgba8(), [0, 0, 0, 128]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("chartreuse-ish").is_err());
        assert!(Color::parse("var(--fg)").is_err());
    }

    #[test]
    fn test_lerp_clamps() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 2.0), Color::WHITE);
    }
}
