//! Image support for PageCurl
//!
//! Holds the decorative curl raster compiled into the crate and the helpers
//! to expose it inline (`data:` URIs) or decode it to RGBA pixels.

mod asset;
mod error;
mod loader;

pub use asset::{
    curl_image_data_uri, decode_curl_image, CURL_IMAGE_HEIGHT, CURL_IMAGE_MIME, CURL_IMAGE_PNG,
    CURL_IMAGE_WIDTH,
};
pub use error::{ImageError, Result};
pub use loader::{to_data_uri, ImageData};
