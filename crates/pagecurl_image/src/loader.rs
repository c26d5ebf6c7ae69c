//! Image decoding and data URIs

use base64::Engine;
use image::GenericImageView;

use crate::error::{ImageError, Result};

/// Decoded image data
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Load image from encoded bytes (PNG)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|e| ImageError::Decode(e.to_string()))?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_raw();

        tracing::trace!(width, height, "decoded image");
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Load image from a base64 payload (no `data:` prefix)
    pub fn from_base64(data: &str) -> Result<Self> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(data.trim())?;
        Self::from_bytes(&bytes)
    }

    /// Load image from a `data:<mime>;base64,<payload>` URI
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let payload = uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, payload)| payload)
            .ok_or_else(|| ImageError::DataUri(truncate(uri)))?;
        Self::from_base64(payload)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Encode bytes as a base64 `data:` URI
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

fn truncate(s: &str) -> String {
    s.chars().take(32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_data_uri() {
        assert!(matches!(
            ImageData::from_data_uri("https://example.com/curl.png"),
            Err(ImageError::DataUri(_))
        ));
        assert!(matches!(
            ImageData::from_data_uri("data:image/png,rawbytes"),
            Err(ImageError::DataUri(_))
        ));
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(matches!(
            ImageData::from_base64("!!!not base64!!!"),
            Err(ImageError::Base64(_))
        ));
    }

    #[test]
    fn test_rejects_non_image_bytes() {
        assert!(matches!(
            ImageData::from_bytes(b"definitely not a png"),
            Err(ImageError::Decode(_))
        ));
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = to_data_uri("image/png", &[1, 2, 3]);
        assert_eq!(uri, "data:image/png;base64,AQID");
    }
}
