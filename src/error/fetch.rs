//! Photo fetch errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a `fetch_photos(page)` call.
///
/// The deck never sees an opaque error: every provider failure is one of
/// these variants, and all of them map to the empty-deck state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {message}")]
    Network { message: String },

    /// A single attempt exceeded the configured fetch timeout.
    #[error("fetching page {page} timed out after {secs}s")]
    Timeout { page: u32, secs: u64 },

    /// The provider answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The payload was not a valid photo page.
    #[error("malformed photo payload: {message}")]
    Parse { message: String },
}

impl FetchError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network { .. } | FetchError::Timeout { .. } => true,
            FetchError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            FetchError::Parse { .. } => false,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "E_FETCH_NET",
            FetchError::Timeout { .. } => "E_FETCH_TIMEOUT",
            FetchError::HttpStatus { .. } => "E_FETCH_HTTP",
            FetchError::Parse { .. } => "E_FETCH_PARSE",
        }
    }

    /// Message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network { .. } => {
                "Unable to reach the photo service. Check your connection.".to_string()
            }
            FetchError::Timeout { secs, .. } => {
                format!("The photo service did not answer within {} seconds.", secs)
            }
            FetchError::HttpStatus { status, .. } => match *status {
                401 | 403 => "The photo service rejected the API key.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The photo service is having trouble. Try again later.".to_string(),
                _ => format!("The photo service returned HTTP {}.", status),
            },
            FetchError::Parse { .. } => {
                "The photo service sent something we could not read.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => {
                FetchError::HttpStatus { status, message }
            }
            other => FetchError::Network {
                message: other.to_string(),
            },
        }
    }
}
