//! Photo data provider.
//!
//! - [`ApiPhotoSource`] - `GET {base}/photos?page={n}` over any [`HttpClient`]
//! - [`RetryPolicy`] - timeout-aware exponential backoff for fetches
//! - [`probe_image`] - the opaque image-loading primitive used by cards
//!
//! [`HttpClient`]: crate::traits::HttpClient

mod api;
mod image;
mod retry;

pub use api::ApiPhotoSource;
pub use image::probe_image;
pub use retry::RetryPolicy;
