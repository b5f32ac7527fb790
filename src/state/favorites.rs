//! Insertion-ordered set of favorited photos.

use crate::models::{Photo, PhotoId};

/// Favorited photos, unique by id, in the order they were added.
///
/// Only `add` and `remove` mutate the set.
#[derive(Debug, Clone, Default)]
pub struct FavoritesSet {
    photos: Vec<Photo>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `photo`. Returns `false` if a photo with the same id is present.
    pub fn add(&mut self, photo: Photo) -> bool {
        if self.contains(photo.id) {
            tracing::debug!(photo_id = photo.id, "Already a favorite");
            return false;
        }
        tracing::debug!(photo_id = photo.id, "Favorite added");
        self.photos.push(photo);
        true
    }

    /// Remove the photo with `id`, returning it.
    pub fn remove(&mut self, id: PhotoId) -> Option<Photo> {
        let index = self.photos.iter().position(|p| p.id == id)?;
        tracing::debug!(photo_id = id, "Favorite removed");
        Some(self.photos.remove(index))
    }

    pub fn list(&self) -> &[Photo] {
        &self.photos
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.photos.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }
}
