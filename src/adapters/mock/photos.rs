//! Scripted photo source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::models::Photo;
use crate::traits::PhotoSource;

/// Photo source that answers each page from a script.
///
/// Pages without a script entry return an empty batch (end of source).
/// Every requested page is recorded, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPhotoSource {
    pages: Arc<Mutex<HashMap<u32, Result<Vec<Photo>, FetchError>>>>,
    requested: Arc<Mutex<Vec<u32>>>,
}

impl ScriptedPhotoSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful page.
    pub fn with_page(self, page: u32, photos: Vec<Photo>) -> Self {
        self.pages.lock().unwrap().insert(page, Ok(photos));
        self
    }

    /// Script a failing page.
    pub fn with_failure(self, page: u32, error: FetchError) -> Self {
        self.pages.lock().unwrap().insert(page, Err(error));
        self
    }

    /// Pages requested so far.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoSource for ScriptedPhotoSource {
    async fn fetch_photos(&self, page: u32) -> Result<Vec<Photo>, FetchError> {
        self.requested.lock().unwrap().push(page);
        self.pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
