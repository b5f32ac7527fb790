//! Windowed view over the loaded photos, with pagination.

use std::collections::{HashMap, HashSet};

use crate::error::{FetchError, ImageLoadError};
use crate::models::{Photo, PhotoId};

/// Why the deck has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// The last page fetch failed; loaded photos were dropped.
    FetchFailed(FetchError),
    /// The provider returned an empty page.
    NoMorePhotos,
}

/// What the deck screen should present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckStatus {
    /// No card to show yet, a page is (or is about to be) fetched
    Loading,
    /// At least one card is visible
    Ready,
    Empty(EmptyReason),
}

/// Load state of a single card's image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Pending,
    Loading,
    Loaded {
        bytes: usize,
    },
    Failed(ImageLoadError),
}

/// Pagination bookkeeping.
///
/// `remote_page` is the next page to request. `batch_start` is the index in
/// the loaded list where the most recently merged batch begins, so the local
/// cursor is `top_index - batch_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub remote_page: u32,
    pub batch_start: usize,
    pub fetch_in_flight: Option<u32>,
    pub exhausted: bool,
}

impl PaginationState {
    fn new(start_page: u32) -> Self {
        Self {
            remote_page: start_page,
            batch_start: 0,
            fetch_in_flight: None,
            exhausted: false,
        }
    }
}

/// A card in the visible window. Depth 0 is the interactive top card.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCard<'a> {
    pub photo: &'a Photo,
    pub depth: usize,
    pub image: ImageStatus,
}

impl VisibleCard<'_> {
    pub fn is_top(&self) -> bool {
        self.depth == 0
    }
}

/// The ordered photo list, the top cursor and the fetch state.
///
/// Batches are appended; nothing already loaded is dropped by pagination.
/// Only a failed fetch or a reload clears the list.
#[derive(Debug)]
pub struct CardDeckModel {
    photos: Vec<Photo>,
    top_index: usize,
    depth: usize,
    start_page: u32,
    pagination: PaginationState,
    empty: Option<EmptyReason>,
    images: HashMap<PhotoId, ImageStatus>,
}

impl CardDeckModel {
    pub fn new(start_page: u32, depth: usize) -> Self {
        Self {
            photos: Vec::new(),
            top_index: 0,
            depth: depth.max(1),
            start_page,
            pagination: PaginationState::new(start_page),
            empty: None,
            images: HashMap::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn top_index(&self) -> usize {
        self.top_index
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Position of the top card within the most recent batch.
    pub fn local_cursor(&self) -> usize {
        self.top_index.saturating_sub(self.pagination.batch_start)
    }

    pub fn total_loaded(&self) -> usize {
        self.photos.len()
    }

    /// Cards from the top to the end of the loaded list.
    pub fn remaining(&self) -> usize {
        self.photos.len().saturating_sub(self.top_index)
    }

    pub fn top(&self) -> Option<&Photo> {
        self.photos.get(self.top_index)
    }

    /// Whether a result for `page` would be applied rather than dropped.
    pub fn awaits_page(&self, page: u32) -> bool {
        self.pagination.fetch_in_flight == Some(page)
    }

    pub fn is_fetching(&self) -> bool {
        self.pagination.fetch_in_flight.is_some()
    }

    pub fn status(&self) -> DeckStatus {
        if self.top().is_some() {
            DeckStatus::Ready
        } else if self.is_fetching() {
            DeckStatus::Loading
        } else if let Some(reason) = &self.empty {
            DeckStatus::Empty(reason.clone())
        } else {
            DeckStatus::Loading
        }
    }

    pub fn status_text(&self) -> String {
        match self.status() {
            DeckStatus::Loading => "Downloading...".to_string(),
            DeckStatus::Ready => format!("{} cards", self.remaining()),
            DeckStatus::Empty(_) => "No image to show".to_string(),
        }
    }

    /// Window `[top_index, top_index + depth)`, top first.
    pub fn visible_cards(&self) -> Vec<VisibleCard<'_>> {
        let end = (self.top_index + self.depth).min(self.photos.len());
        self.photos
            .get(self.top_index..end)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(depth, photo)| VisibleCard {
                photo,
                depth,
                image: self.image_status(photo.id),
            })
            .collect()
    }

    /// Visible cards back to front; the last one is the interactive card.
    pub fn render_order(&self) -> Vec<VisibleCard<'_>> {
        let mut cards = self.visible_cards();
        cards.reverse();
        cards
    }

    /// Claim the next page for fetching.
    ///
    /// Returns `None` while another fetch is in flight.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if let Some(page) = self.pagination.fetch_in_flight {
            tracing::debug!(page, "Fetch already in flight");
            return None;
        }
        let page = self.pagination.remote_page;
        self.pagination.fetch_in_flight = Some(page);
        tracing::info!(page, "Fetching photo page");
        Some(page)
    }

    /// Append a fetched batch. Returns `false` for a result nobody asked for.
    ///
    /// Photos already loaded are skipped. An empty batch marks the source
    /// exhausted.
    pub fn merge_batch(&mut self, page: u32, photos: Vec<Photo>) -> bool {
        if !self.settle_fetch(page) {
            return false;
        }

        let mut seen = HashSet::new();
        let fresh: Vec<Photo> = photos
            .into_iter()
            .filter(|p| !self.images.contains_key(&p.id) && seen.insert(p.id))
            .collect();

        if fresh.is_empty() {
            tracing::info!(page, "Photo source exhausted");
            self.pagination.exhausted = true;
            self.empty = Some(EmptyReason::NoMorePhotos);
            return true;
        }

        tracing::info!(page, count = fresh.len(), "Merged photo page");
        self.pagination.batch_start = self.photos.len();
        self.pagination.remote_page = page.saturating_add(1);
        self.pagination.exhausted = false;
        for photo in &fresh {
            self.images.insert(photo.id, ImageStatus::Pending);
        }
        self.photos.extend(fresh);
        self.empty = None;
        true
    }

    /// Record a failed fetch: every loaded photo is dropped.
    pub fn fail_fetch(&mut self, page: u32, error: FetchError) -> bool {
        if !self.settle_fetch(page) {
            return false;
        }
        tracing::warn!(page, error = %error, "Photo fetch failed; clearing deck");
        self.clear();
        self.empty = Some(EmptyReason::FetchFailed(error));
        true
    }

    /// Start over from the first page. Refused while a fetch is in flight.
    pub fn reload(&mut self) -> Option<u32> {
        if self.is_fetching() {
            tracing::debug!("Reload ignored while fetching");
            return None;
        }
        self.clear();
        self.empty = None;
        self.pagination = PaginationState::new(self.start_page);
        self.begin_fetch()
    }

    /// Move past the top card. Returns a page to fetch when the loaded list
    /// ran out and no fetch is already pending.
    pub fn advance(&mut self) -> Option<u32> {
        if self.top().is_none() {
            return None;
        }
        self.top_index += 1;

        if self.top().is_some() {
            return None;
        }
        if self.pagination.exhausted {
            self.empty = Some(EmptyReason::NoMorePhotos);
            return None;
        }
        self.begin_fetch()
    }

    /// Put `photo` back on top (undo).
    ///
    /// If it is the card just passed, the cursor steps back onto it;
    /// otherwise it is re-inserted by value at the cursor.
    pub fn restore(&mut self, photo: Photo) {
        let previous = self.top_index.checked_sub(1);
        match previous {
            Some(index) if self.photos.get(index) == Some(&photo) => {
                self.top_index = index;
            }
            _ => {
                if let Some(pos) = self.photos.iter().position(|p| *p == photo) {
                    self.photos.remove(pos);
                    if pos < self.top_index {
                        self.top_index -= 1;
                    }
                }
                self.images.entry(photo.id).or_default();
                self.photos.insert(self.top_index, photo);
            }
        }
        self.pagination.batch_start = self.pagination.batch_start.min(self.top_index);
    }

    pub fn image_status(&self, id: PhotoId) -> ImageStatus {
        self.images.get(&id).cloned().unwrap_or_default()
    }

    /// Update a card's image state. Unknown ids (cleared deck) are ignored.
    pub fn mark_image(&mut self, id: PhotoId, status: ImageStatus) -> bool {
        match self.images.get_mut(&id) {
            Some(slot) => {
                *slot = status;
                true
            }
            None => false,
        }
    }

    /// Visible cards whose image has not been requested yet, now marked
    /// as loading.
    pub fn take_image_requests(&mut self) -> Vec<(PhotoId, String)> {
        let end = (self.top_index + self.depth).min(self.photos.len());
        let mut requests = Vec::new();
        for photo in self.photos.get(self.top_index..end).unwrap_or_default() {
            let slot = self.images.entry(photo.id).or_default();
            if *slot == ImageStatus::Pending {
                *slot = ImageStatus::Loading;
                requests.push((photo.id, photo.image_url.clone()));
            }
        }
        requests
    }

    fn settle_fetch(&mut self, page: u32) -> bool {
        if !self.awaits_page(page) {
            tracing::warn!(
                page,
                in_flight = ?self.pagination.fetch_in_flight,
                "Dropping result for a page that was not requested"
            );
            return false;
        }
        self.pagination.fetch_in_flight = None;
        true
    }

    fn clear(&mut self) {
        self.photos.clear();
        self.images.clear();
        self.top_index = 0;
        self.pagination.batch_start = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(ids: &[u64]) -> Vec<Photo> {
        ids.iter()
            .map(|id| Photo::new(*id, format!("https://img/{}.jpg", id)))
            .collect()
    }

    fn loaded(ids: &[u64]) -> CardDeckModel {
        let mut deck = CardDeckModel::new(1, 3);
        let page = deck.begin_fetch().unwrap();
        assert!(deck.merge_batch(page, photos(ids)));
        deck
    }

    fn ids(cards: &[VisibleCard<'_>]) -> Vec<u64> {
        cards.iter().map(|c| c.photo.id).collect()
    }

    #[test]
    fn test_new_deck_is_loading() {
        let deck = CardDeckModel::new(1, 3);
        assert_eq!(deck.status(), DeckStatus::Loading);
        assert_eq!(deck.status_text(), "Downloading...");
        assert!(deck.visible_cards().is_empty());
    }

    #[test]
    fn test_visible_window_clipped_to_depth() {
        let deck = loaded(&[1, 2, 3, 4, 5]);
        let cards = deck.visible_cards();
        assert_eq!(ids(&cards), vec![1, 2, 3]);
        assert!(cards[0].is_top());
        assert_eq!(cards[2].depth, 2);

        assert_eq!(ids(&deck.render_order()), vec![3, 2, 1]);
        assert_eq!(deck.status_text(), "5 cards");
    }

    #[test]
    fn test_advance_shrinks_window_from_front() {
        let mut deck = loaded(&[1, 2, 3, 4]);
        assert_eq!(deck.advance(), None);
        assert_eq!(ids(&deck.visible_cards()), vec![2, 3, 4]);
        assert_eq!(deck.advance(), None);
        assert_eq!(ids(&deck.visible_cards()), vec![3, 4]);
        assert_eq!(deck.local_cursor(), 2);
    }

    #[test]
    fn test_exhaustion_requests_exactly_one_fetch() {
        let mut deck = loaded(&[1, 2, 3]);
        deck.advance();
        deck.advance();
        assert_eq!(deck.advance(), Some(2));
        assert_eq!(deck.status(), DeckStatus::Loading);

        // Nothing else can start a fetch until page 2 resolves.
        assert_eq!(deck.advance(), None);
        assert_eq!(deck.begin_fetch(), None);
        assert_eq!(deck.reload(), None);
        assert_eq!(deck.pagination().fetch_in_flight, Some(2));
    }

    #[test]
    fn test_merge_appends_and_resets_local_cursor() {
        let mut deck = loaded(&[1, 2, 3]);
        for _ in 0..3 {
            deck.advance();
        }
        assert!(deck.merge_batch(2, photos(&[4])));

        assert_eq!(ids(&deck.visible_cards()), vec![4]);
        assert_eq!(deck.local_cursor(), 0);
        assert_eq!(deck.total_loaded(), 4);
        assert_eq!(deck.pagination().remote_page, 3);
        assert_eq!(deck.status_text(), "1 cards");
    }

    #[test]
    fn test_failed_fetch_clears_deck() {
        let mut deck = loaded(&[1, 2, 3]);
        for _ in 0..3 {
            deck.advance();
        }
        let error = FetchError::Network {
            message: "offline".to_string(),
        };
        assert!(deck.fail_fetch(2, error.clone()));

        assert_eq!(deck.total_loaded(), 0);
        assert_eq!(deck.status(), DeckStatus::Empty(EmptyReason::FetchFailed(error)));
        assert_eq!(deck.status_text(), "No image to show");
    }

    #[test]
    fn test_empty_page_means_no_more_photos() {
        let mut deck = loaded(&[1]);
        assert_eq!(deck.advance(), Some(2));
        assert!(deck.merge_batch(2, Vec::new()));
        assert_eq!(deck.status(), DeckStatus::Empty(EmptyReason::NoMorePhotos));
        assert_eq!(deck.status_text(), "No image to show");
        assert!(deck.pagination().exhausted);
    }

    #[test]
    fn test_retried_page_with_photos_resumes_paging() {
        let mut deck = loaded(&[1]);
        assert_eq!(deck.advance(), Some(2));
        assert!(deck.merge_batch(2, Vec::new()));

        // Re-entering the deck asks for the same page again.
        assert_eq!(deck.begin_fetch(), Some(2));
        assert!(deck.merge_batch(2, photos(&[5])));
        assert!(!deck.pagination().exhausted);

        assert_eq!(deck.advance(), Some(3));
        assert_eq!(deck.status(), DeckStatus::Loading);
    }

    #[test]
    fn test_awaits_only_the_in_flight_page() {
        let mut deck = loaded(&[1]);
        assert!(!deck.awaits_page(1));
        assert_eq!(deck.advance(), Some(2));
        assert!(deck.awaits_page(2));
        assert!(!deck.awaits_page(5));
    }

    #[test]
    fn test_unrequested_result_is_dropped() {
        let mut deck = loaded(&[1, 2]);
        assert!(!deck.merge_batch(7, photos(&[9])));
        assert!(!deck.fail_fetch(7, FetchError::Parse { message: "x".into() }));
        assert_eq!(deck.total_loaded(), 2);
    }

    #[test]
    fn test_merge_skips_known_ids() {
        let mut deck = loaded(&[1, 2]);
        deck.advance();
        deck.advance();
        assert!(deck.merge_batch(2, photos(&[2, 3])));
        assert_eq!(ids(&deck.visible_cards()), vec![3]);
    }

    #[test]
    fn test_restore_steps_back() {
        let mut deck = loaded(&[1, 2, 3]);
        deck.advance();
        deck.restore(Photo::new(1, "https://img/1.jpg"));
        assert_eq!(deck.top().map(|p| p.id), Some(1));
        assert_eq!(deck.total_loaded(), 3);
    }

    #[test]
    fn test_restore_into_cleared_deck() {
        let mut deck = loaded(&[1]);
        deck.advance();
        deck.fail_fetch(2, FetchError::Network { message: "down".into() });

        deck.restore(Photo::new(1, "https://img/1.jpg"));
        assert_eq!(deck.status(), DeckStatus::Ready);
        assert_eq!(deck.top().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_reload_starts_from_first_page() {
        let mut deck = CardDeckModel::new(3, 3);
        let page = deck.begin_fetch().unwrap();
        deck.merge_batch(page, photos(&[1]));
        deck.advance();
        deck.fail_fetch(4, FetchError::Network { message: "x".into() });

        assert_eq!(deck.reload(), Some(3));
        assert_eq!(deck.status(), DeckStatus::Loading);
    }

    #[test]
    fn test_image_requests_only_once_per_visible_card() {
        let mut deck = loaded(&[1, 2, 3, 4]);
        let requests = deck.take_image_requests();
        assert_eq!(
            requests.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(deck.take_image_requests().is_empty());
        assert_eq!(deck.image_status(1), ImageStatus::Loading);

        deck.mark_image(1, ImageStatus::Loaded { bytes: 10 });
        deck.advance();
        assert_eq!(deck.take_image_requests(), vec![(4, "https://img/4.jpg".to_string())]);
        assert!(!deck.mark_image(99, ImageStatus::Loading));
    }
}
