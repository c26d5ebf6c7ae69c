//! Page curl configuration
//!
//! Everything the caller controls except the click callback, which cannot be
//! serialized and lives on the widget itself. Loadable from TOML:
//!
//! ```toml
//! size = 96
//! is_dark_mode = true
//! dark_mode_color = "#fafaf9"
//! hover_scale = 1.2
//! ```

use std::fs;
use std::path::Path;

use pagecurl_core::{Color, CoreError, Size};
use serde::{Deserialize, Serialize};

use crate::error::{PageCurlError, Result};
use crate::geometry;

/// Caller-supplied configuration, immutable for a single render
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PageCurlConfig {
    /// Displayed width in pixels; height follows the corner's aspect ratio
    #[serde(default = "default_size")]
    pub size: f32,
    /// Color shown in the corner when in light mode (typically dark)
    #[serde(default = "default_light_mode_color")]
    pub light_mode_color: String,
    /// Color shown in the corner when in dark mode (typically light)
    #[serde(default = "default_dark_mode_color")]
    pub dark_mode_color: String,
    /// Whether the host page currently uses its dark theme
    #[serde(default)]
    pub is_dark_mode: bool,
    /// Scale factor applied while hovered (1.15 = 115%)
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f32,
    /// Duration of the scale and fill transitions, in milliseconds
    #[serde(default = "default_transition_duration")]
    pub transition_duration: u32,
    /// CSS filter applied to the decorative image, passed through verbatim
    #[serde(default = "default_shadow")]
    pub shadow: String,
    /// Extra class for the outer container
    #[serde(default)]
    pub class_name: String,
}

fn default_size() -> f32 {
    72.0
}

fn default_light_mode_color() -> String {
    "#1c1917".to_string()
}

fn default_dark_mode_color() -> String {
    "#ffffff".to_string()
}

fn default_hover_scale() -> f32 {
    1.15
}

fn default_transition_duration() -> u32 {
    150
}

fn default_shadow() -> String {
    "drop-shadow(-4px -2px 10px rgba(0, 0, 0, 0.5))".to_string()
}

impl Default for PageCurlConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            light_mode_color: default_light_mode_color(),
            dark_mode_color: default_dark_mode_color(),
            is_dark_mode: false,
            hover_scale: default_hover_scale(),
            transition_duration: default_transition_duration(),
            shadow: default_shadow(),
            class_name: String::new(),
        }
    }
}

impl PageCurlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PageCurlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded page curl config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The corner fill for the current theme
    ///
    /// Dark mode shows `dark_mode_color`, light mode `light_mode_color`.
    pub fn fill_color(&self) -> &str {
        if self.is_dark_mode {
            &self.dark_mode_color
        } else {
            &self.light_mode_color
        }
    }

    /// [`fill_color`](Self::fill_color) parsed for native rendering
    pub fn fill_rgba(&self) -> std::result::Result<Color, CoreError> {
        Color::parse(self.fill_color())
    }

    /// Displayed width and derived height
    pub fn display_size(&self) -> Size {
        geometry::display_size(self.size)
    }

    /// Scale for a hover state
    pub fn scale_for(&self, hovered: bool) -> f32 {
        if hovered {
            self.hover_scale
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = PageCurlConfig::default();
        assert_eq!(c.size, 72.0);
        assert_eq!(c.light_mode_color, "#1c1917");
        assert_eq!(c.dark_mode_color, "#ffffff");
        assert!(!c.is_dark_mode);
        assert_eq!(c.hover_scale, 1.15);
        assert_eq!(c.transition_duration, 150);
        assert_eq!(c.shadow, "drop-shadow(-4px -2px 10px rgba(0, 0, 0, 0.5))");
        assert!(c.class_name.is_empty());
    }

    #[test]
    fn test_fill_color_selection() {
        for light in ["#000000", "#123456"] {
            for dark in ["#ffffff", "#abcdef"] {
                let mut c = PageCurlConfig {
                    light_mode_color: light.to_string(),
                    dark_mode_color: dark.to_string(),
                    ..Default::default()
                };
                c.is_dark_mode = true;
                assert_eq!(c.fill_color(), dark);
                c.is_dark_mode = false;
                assert_eq!(c.fill_color(), light);
            }
        }
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            PageCurlConfig::from_toml_str("").unwrap(),
            PageCurlConfig::default()
        );
    }

    #[test]
    fn test_partial_toml() {
        let c = PageCurlConfig::from_toml_str(
            r##"
            size = 100
            is_dark_mode = true
            dark_mode_color = "#fafaf9"
            hover_scale = 1.2
            "##,
        )
        .unwrap();
        assert_eq!(c.size, 100.0);
        assert_eq!(c.fill_color(), "#fafaf9");
        assert_eq!(c.hover_scale, 1.2);
        assert_eq!(c.transition_duration, 150);
    }

    #[test]
    fn test_toml_roundtrip() {
        let c = PageCurlConfig {
            size: 48.0,
            class_name: "corner".to_string(),
            ..Default::default()
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(PageCurlConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            PageCurlConfig::from_toml_str("size = \"big\""),
            Err(PageCurlError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PageCurlConfig::load("/nonexistent/pagecurl.toml").unwrap_err();
        assert!(matches!(err, PageCurlError::Io { .. }));
    }

    #[test]
    fn test_display_size() {
        let s = PageCurlConfig::default().display_size();
        assert_eq!(s.width, 72.0);
        assert!((s.height - 72.0 * 1903.0 / 830.0).abs() < 1e-3);
    }

    #[test]
    fn test_scale_for() {
        let c = PageCurlConfig::default();
        assert_eq!(c.scale_for(false), 1.0);
        assert_eq!(c.scale_for(true), 1.15);
    }
}
