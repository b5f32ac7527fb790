//! AppMessage enum for async results delivered to the event loop.

use crate::error::{FetchError, ImageLoadError};
use crate::models::{Photo, PhotoId};

/// Messages received from spawned I/O tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A photo page request finished
    PhotosFetched {
        page: u32,
        result: Result<Vec<Photo>, FetchError>,
    },
    /// An image probe finished
    ImageProbed {
        id: PhotoId,
        result: Result<usize, ImageLoadError>,
    },
}
