//! SVG support for PageCurl
//!
//! Path-data parsing into `pagecurl_core::Path` (via `usvg`) and CPU
//! rasterization of SVG documents (via `resvg` and `tiny-skia`).
//!
//! # Example
//!
//! ```ignore
//! use pagecurl_svg::{parse_path_data, RasterizedSvg};
//!
//! let path = parse_path_data("M0,0 L10,0 L0,10 Z")?;
//! let raster = RasterizedSvg::from_str_native(&svg_markup)?;
//! raster.save_png("curl.png")?;
//! ```

mod error;
mod path;
mod rasterize;

pub use error::SvgError;
pub use path::{escape_attr, parse_path_data, usvg_path_to_core};
pub use rasterize::RasterizedSvg;
