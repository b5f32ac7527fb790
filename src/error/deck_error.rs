//! Unified error type for marsdeck.

use thiserror::Error;

use super::category::ErrorCategory;
use super::fetch::FetchError;
use super::image::ImageLoadError;

/// Unified error type.
///
/// Library code returns the domain errors directly; this type exists for
/// the places that can fail in more than one way (startup, the event loop).
#[derive(Debug, Error)]
pub enum DeckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Image(#[from] ImageLoadError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Type alias for Results using DeckError.
pub type DeckResult<T> = Result<T, DeckError>;

impl DeckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeckError::Fetch(err) => match err {
                FetchError::Network { .. } | FetchError::Timeout { .. } => ErrorCategory::Network,
                FetchError::HttpStatus { .. } if err.is_retryable() => ErrorCategory::Server,
                FetchError::HttpStatus { .. } | FetchError::Parse { .. } => ErrorCategory::Client,
            },
            DeckError::Image(_) => ErrorCategory::Network,
            DeckError::Terminal(_) => ErrorCategory::System,
            DeckError::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            DeckError::Fetch(err) => err.is_retryable(),
            _ => false,
        }
    }
}
