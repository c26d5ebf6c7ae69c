//! The embedded curl shading image
//!
//! A small RGBA PNG drawn in the same 830×1903 proportions as the corner
//! geometry. It is compiled into the binary so rendering never touches the
//! filesystem or the network.

use std::sync::OnceLock;

use crate::error::Result;
use crate::loader::{to_data_uri, ImageData};

/// Encoded PNG bytes of the curl overlay
pub const CURL_IMAGE_PNG: &[u8] = include_bytes!("../assets/curl.png");

/// MIME type of [`CURL_IMAGE_PNG`]
pub const CURL_IMAGE_MIME: &str = "image/png";

/// Intrinsic size the overlay is laid out at, in view-box units
pub const CURL_IMAGE_WIDTH: u32 = 830;
pub const CURL_IMAGE_HEIGHT: u32 = 1903;

/// The overlay as an inline `data:image/png;base64,...` URI
pub fn curl_image_data_uri() -> &'static str {
    static URI: OnceLock<String> = OnceLock::new();
    URI.get_or_init(|| to_data_uri(CURL_IMAGE_MIME, CURL_IMAGE_PNG))
}

/// Decode the overlay's pixels
pub fn decode_curl_image() -> Result<ImageData> {
    ImageData::from_bytes(CURL_IMAGE_PNG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_image_decodes() {
        let img = decode_curl_image().unwrap();
        let (w, h) = img.dimensions();
        assert!(w > 0 && h > 0);
        assert_eq!(img.pixels().len(), (w * h * 4) as usize);
    }

    #[test]
    fn test_embedded_image_matches_geometry_proportions() {
        let img = decode_curl_image().unwrap();
        let ratio = img.height() as f32 / img.width() as f32;
        let expected = CURL_IMAGE_HEIGHT as f32 / CURL_IMAGE_WIDTH as f32;
        assert!((ratio - expected).abs() < 0.02, "ratio {ratio} vs {expected}");
    }

    #[test]
    fn test_data_uri_roundtrip() {
        let uri = curl_image_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
        let img = ImageData::from_data_uri(uri).unwrap();
        assert_eq!(img.dimensions(), decode_curl_image().unwrap().dimensions());
    }

    #[test]
    fn test_data_uri_is_cached() {
        assert!(std::ptr::eq(curl_image_data_uri(), curl_image_data_uri()));
    }
}
