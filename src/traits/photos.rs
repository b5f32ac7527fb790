//! Photo data provider trait.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Photo;

/// Paginated source of photos.
///
/// Pages are 1-based. An empty vector means the source has no more photos.
/// Implementations never panic or return opaque errors; every failure is a
/// [`FetchError`].
#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn fetch_photos(&self, page: u32) -> Result<Vec<Photo>, FetchError>;
}
