//! Image error types

use thiserror::Error;

/// Errors that can occur when decoding image data
#[derive(Error, Debug)]
pub enum ImageError {
    /// Image decoding failed
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Base64 payload was malformed
    #[error("Invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A string that is not a base64 `data:` URI
    #[error("Invalid data URI: {0}")]
    DataUri(String),
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
