//! Photo model and its wire representation.

use serde::{Deserialize, Serialize};

/// Stable identifier of a photo across fetches.
pub type PhotoId = u64;

/// A photograph shown on a deck card.
///
/// Photos are immutable once fetched. Two photos are the same photo when
/// their ids match, regardless of the URL they were served with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    /// Source URL of the full-size image
    #[serde(rename = "img_src")]
    pub image_url: String,
}

impl Photo {
    pub fn new(id: PhotoId, image_url: impl Into<String>) -> Self {
        Self {
            id,
            image_url: image_url.into(),
        }
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Photo {}

impl std::hash::Hash for Photo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One page of photos as returned by `GET /photos?page={n}`.
///
/// Extra fields the API sends per photo (camera, rover, sol, earth_date)
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub photos: Vec<Photo>,
}
