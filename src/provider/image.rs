//! Image availability probe.
//!
//! Decoding is out of scope: a card only needs to know whether its image
//! can be loaded, and roughly how large it is.

use crate::error::ImageLoadError;
use crate::traits::{Headers, HttpClient};

/// Load the image at `url` and report its size in bytes.
pub async fn probe_image<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<usize, ImageLoadError> {
    let response = client
        .get(url, &Headers::new())
        .await
        .map_err(|e| ImageLoadError::Unreachable {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !response.is_success() {
        return Err(ImageLoadError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    if response.body.is_empty() {
        return Err(ImageLoadError::Empty {
            url: url.to_string(),
        });
    }
    Ok(response.body.len())
}
