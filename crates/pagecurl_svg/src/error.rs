//! SVG error types

use std::io;
use thiserror::Error;

/// Errors that can occur when parsing or rasterizing SVG
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// Raster size the renderer cannot produce
    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding error
    #[error("PNG encoding error: {0}")]
    Encode(String),
}
