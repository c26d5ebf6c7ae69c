//! Widget error types
//!
//! Interaction never fails; these cover the ambient operations around the
//! widget (loading config files, producing raster previews).

use std::io;
use std::path::PathBuf;

use pagecurl_image::ImageError;
use pagecurl_svg::SvgError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageCurlError {
    /// Reading or writing a config file failed
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for `PageCurlConfig`
    #[error("Invalid page curl config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize page curl config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Svg(#[from] SvgError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

pub type Result<T> = std::result::Result<T, PageCurlError>;
