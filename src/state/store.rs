//! Application state and its transition function.

use crate::deck::{CardDeckModel, ImageStatus};
use crate::error::{FetchError, ImageLoadError};
use crate::models::{Photo, PhotoId, SwipeOutcome};

use super::favorites::FavoritesSet;

/// Something that happened: user intent or an async result.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The deck screen was entered
    Start,
    PhotosLoaded {
        page: u32,
        result: Result<Vec<Photo>, FetchError>,
    },
    /// A committed swipe settled
    Swiped(SwipeOutcome),
    Undo,
    RemoveFavorite(PhotoId),
    Reload,
    ImageLoaded {
        id: PhotoId,
        bytes: usize,
    },
    ImageFailed {
        id: PhotoId,
        error: ImageLoadError,
    },
}

/// I/O requested by a transition, executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(u32),
    ProbeImage { id: PhotoId, url: String },
}

/// The swipe `Undo` would revert.
#[derive(Debug)]
struct LastSwipe {
    outcome: SwipeOutcome,
    /// The swipe put the photo into favorites (it was not there already)
    inserted: bool,
}

/// Deck, favorites and the one-step undo record.
#[derive(Debug)]
pub struct AppState {
    pub deck: CardDeckModel,
    pub favorites: FavoritesSet,
    last_swipe: Option<LastSwipe>,
}

impl AppState {
    pub fn new(start_page: u32, display_depth: usize) -> Self {
        Self {
            deck: CardDeckModel::new(start_page, display_depth),
            favorites: FavoritesSet::new(),
            last_swipe: None,
        }
    }

    /// The swipe that `Undo` would revert, if any.
    pub fn last_outcome(&self) -> Option<&SwipeOutcome> {
        self.last_swipe.as_ref().map(|last| &last.outcome)
    }

    pub fn can_undo(&self) -> bool {
        self.last_swipe.is_some()
    }

    /// Apply `action`. No I/O happens here; the returned effects are the
    /// caller's to run.
    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();

        match action {
            Action::Start => {
                if self.deck.top().is_none() && !self.deck.is_fetching() {
                    effects.extend(self.deck.begin_fetch().map(Effect::FetchPage));
                }
            }
            Action::PhotosLoaded { page, result } => match result {
                Ok(photos) => {
                    self.deck.merge_batch(page, photos);
                }
                Err(error) => {
                    self.deck.fail_fetch(page, error);
                }
            },
            Action::Swiped(outcome) => {
                let top_id = self.deck.top().map(|p| p.id);
                if top_id != Some(outcome.photo().id) {
                    tracing::warn!(
                        photo_id = outcome.photo().id,
                        ?top_id,
                        "Dropping outcome for a card that is not on top"
                    );
                    return effects;
                }
                let inserted = match &outcome {
                    SwipeOutcome::Favorite(photo) => self.favorites.add(photo.clone()),
                    SwipeOutcome::Discard(_) => false,
                };
                effects.extend(self.deck.advance().map(Effect::FetchPage));
                self.last_swipe = Some(LastSwipe { outcome, inserted });
            }
            Action::Undo => match self.last_swipe.take() {
                Some(LastSwipe { outcome, inserted }) => {
                    tracing::info!(photo_id = outcome.photo().id, "Undoing last swipe");
                    if inserted {
                        self.favorites.remove(outcome.photo().id);
                    }
                    self.deck.restore(outcome.into_photo());
                }
                None => tracing::debug!("Nothing to undo"),
            },
            Action::RemoveFavorite(id) => {
                if self.favorites.remove(id).is_some()
                    && matches!(
                        self.last_outcome(),
                        Some(SwipeOutcome::Favorite(p)) if p.id == id
                    )
                {
                    self.last_swipe = None;
                }
            }
            Action::Reload => {
                self.last_swipe = None;
                effects.extend(self.deck.reload().map(Effect::FetchPage));
            }
            Action::ImageLoaded { id, bytes } => {
                self.deck.mark_image(id, ImageStatus::Loaded { bytes });
            }
            Action::ImageFailed { id, error } => {
                tracing::debug!(photo_id = id, error = %error, "Image failed to load");
                self.deck.mark_image(id, ImageStatus::Failed(error));
            }
        }

        effects.extend(
            self.deck
                .take_image_requests()
                .into_iter()
                .map(|(id, url)| Effect::ProbeImage { id, url }),
        );
        effects
    }
}
