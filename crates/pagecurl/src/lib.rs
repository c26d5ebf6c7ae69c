//! Page curl corner widget
//!
//! A folded-page corner pinned to the top-left of the viewport. Clicking it
//! runs a callback (typically a theme toggle); hovering scales it up from
//! the corner. What is painted and what is clickable come from the same
//! path, [`CORNER_PATH`].
//!
//! # Quick start
//!
//! ```
//! use pagecurl::prelude::*;
//!
//! let curl = page_curl().size(72.0).is_dark_mode(false).build();
//! let html = curl.tree().to_html();
//! assert!(html.contains("Page curl toggle"));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
mod markup;
pub mod state;
pub mod tree;
pub mod widget;

pub use config::PageCurlConfig;
pub use error::{PageCurlError, Result};
pub use geometry::{corner_path, hit_test, CORNER_PATH, VIEW_BOX_ATTR};
pub use state::{HoverState, Interaction};
pub use tree::{
    BackgroundLayer, Container, DecorationLayer, HitRegion, PageCurlTree, PointerEvents,
    ScaleTransform, TransitionSpec,
};
pub use widget::{page_curl, EventOutcome, PageCurl, PageCurlBuilder, PointerEvent, WidgetId};

/// Commonly used types
pub mod prelude {
    pub use crate::config::PageCurlConfig;
    pub use crate::state::Interaction;
    pub use crate::tree::PageCurlTree;
    pub use crate::widget::{page_curl, EventOutcome, PageCurl, PointerEvent};
    pub use pagecurl_core::{Color, Point};
}
