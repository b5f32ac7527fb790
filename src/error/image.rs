//! Per-card image load errors.

use thiserror::Error;

/// A single photo's image could not be loaded.
///
/// Only ever affects that card's presentation ("Couldn't load image.").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    #[error("image at {url} is unreachable: {message}")]
    Unreachable { url: String, message: String },

    #[error("image at {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("image at {url} is empty")]
    Empty { url: String },
}

impl ImageLoadError {
    pub fn url(&self) -> &str {
        match self {
            ImageLoadError::Unreachable { url, .. }
            | ImageLoadError::HttpStatus { url, .. }
            | ImageLoadError::Empty { url } => url,
        }
    }
}
