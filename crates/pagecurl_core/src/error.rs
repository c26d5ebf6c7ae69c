//! Core error types

use thiserror::Error;

/// Errors produced by core primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A color string that is not one of the supported CSS forms
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}
