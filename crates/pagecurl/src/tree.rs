//! Rendered visual tree
//!
//! The output of a render: a fixed top-left container holding three layers
//! in paint order. The background's mask and the hit region's clip both
//! reference [`CORNER_PATH`] itself, so painted and clickable areas cannot
//! drift apart.

use std::fmt;

use pagecurl_animation::Easing;
use pagecurl_core::{Affine2D, Point, Rect, Size};

use crate::config::PageCurlConfig;
use crate::geometry::{self, CORNER_PATH};
use crate::widget::WidgetId;

/// Stacking layer the container is placed on, above ordinary page content
pub const Z_INDEX: i32 = 50;

/// Accessible label of the hit region
pub const HIT_REGION_LABEL: &str = "Page curl toggle";

/// Pointer event behavior of a layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerEvents {
    /// Normal hit testing
    #[default]
    Auto,
    /// Transparent to input
    None,
}

impl PointerEvents {
    pub fn as_css(&self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
        }
    }
}

/// An animated property: which one, for how long, along which curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    pub property: &'static str,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TransitionSpec {
    pub fn new(property: &'static str, duration_ms: u32, easing: Easing) -> Self {
        Self {
            property,
            duration_ms,
            easing,
        }
    }
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.property, self.duration_ms, self.easing)
    }
}

/// Uniform scale around a fixed origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub factor: f32,
    pub origin: Point,
}

impl ScaleTransform {
    /// Scale pinned to the top-left corner
    pub fn top_left(factor: f32) -> Self {
        Self {
            factor,
            origin: Point::ZERO,
        }
    }

    pub fn to_affine(&self) -> Affine2D {
        Affine2D::scale_about(self.factor, self.factor, self.origin)
    }
}

impl fmt::Display for ScaleTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale({})", self.factor)
    }
}

/// Fixed-position outer container
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub id: WidgetId,
    pub class_name: String,
    /// Top-left corner in viewport coordinates; always (0, 0)
    pub position: Point,
    pub z_index: i32,
    pub size: Size,
    /// Applied after commit by the transform effect
    pub transform: ScaleTransform,
    pub transition: TransitionSpec,
}

/// Full-size rectangle painted through the corner mask
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLayer {
    pub view_box: Rect,
    pub mask_id: String,
    pub mask_path: &'static str,
    pub fill: String,
    pub transition: TransitionSpec,
    pub pointer_events: PointerEvents,
}

/// Invisible full-size rectangle clipped to the corner, receiving pointer input
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub view_box: Rect,
    pub clip_id: String,
    pub clip_path: &'static str,
    pub role: &'static str,
    pub label: &'static str,
    pub cursor: &'static str,
    pub pointer_events: PointerEvents,
}

/// Shading image drawn over everything, ignoring input
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationLayer {
    pub src: &'static str,
    pub alt: &'static str,
    /// Layout size the image is authored at, in view-box units
    pub intrinsic_size: Size,
    /// Displayed size in pixels
    pub size: Size,
    /// CSS filter, verbatim from the config's `shadow`
    pub filter: String,
    pub pointer_events: PointerEvents,
}

/// The rendered widget
#[derive(Clone, Debug, PartialEq)]
pub struct PageCurlTree {
    pub container: Container,
    pub background: BackgroundLayer,
    pub hit_region: HitRegion,
    pub decoration: DecorationLayer,
}

impl PageCurlTree {
    /// Evaluate the tree for a configuration and an applied scale
    pub fn build(id: WidgetId, config: &PageCurlConfig, scale: f32) -> Self {
        let size = config.display_size();
        let view_box = geometry::view_box();

        let container = Container {
            id,
            class_name: config.class_name.clone(),
            position: Point::ZERO,
            z_index: Z_INDEX,
            size,
            transform: ScaleTransform::top_left(scale),
            transition: TransitionSpec::new(
                "transform",
                config.transition_duration,
                Easing::EaseOut,
            ),
        };

        let background = BackgroundLayer {
            view_box,
            mask_id: format!("pagecurl-{}-mask", id.as_u64()),
            mask_path: CORNER_PATH,
            fill: config.fill_color().to_string(),
            transition: TransitionSpec::new("fill", config.transition_duration, Easing::EaseIn),
            pointer_events: PointerEvents::None,
        };

        let hit_region = HitRegion {
            view_box,
            clip_id: format!("pagecurl-{}-clip", id.as_u64()),
            clip_path: CORNER_PATH,
            role: "button",
            label: HIT_REGION_LABEL,
            cursor: "pointer",
            pointer_events: PointerEvents::Auto,
        };

        let decoration = DecorationLayer {
            src: pagecurl_image::curl_image_data_uri(),
            alt: "",
            intrinsic_size: Size::new(
                pagecurl_image::CURL_IMAGE_WIDTH as f32,
                pagecurl_image::CURL_IMAGE_HEIGHT as f32,
            ),
            size,
            filter: config.shadow.clone(),
            pointer_events: PointerEvents::None,
        };

        Self {
            container,
            background,
            hit_region,
            decoration,
        }
    }

    pub fn width(&self) -> f32 {
        self.container.size.width
    }

    pub fn height(&self) -> f32 {
        self.container.size.height
    }

    pub fn fill_color(&self) -> &str {
        &self.background.fill
    }

    pub fn scale(&self) -> f32 {
        self.container.transform.factor
    }
}
