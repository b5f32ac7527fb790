//! Screen switching and favorites grid navigation.

use super::{App, Screen, FAVORITES_COLUMNS};
use crate::state::Action;

impl App {
    pub fn open_favorites(&mut self) {
        if self.engine.phase() == crate::deck::GesturePhase::Dragging {
            self.engine.release();
        }
        self.screen = Screen::Favorites;
        self.favorites_view.clamp(self.state.favorites.len());
        self.mark_dirty();
    }

    /// Back to the deck. Re-entering retries an empty deck.
    pub fn open_deck(&mut self) {
        self.screen = Screen::Deck;
        self.favorites_view.overlay = false;
        self.favorites_view.confirm_delete = None;
        self.dispatch(Action::Start);
    }

    /// Move the grid selection by `dx` columns and `dy` rows.
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let len = self.state.favorites.len();
        if len == 0 {
            return;
        }
        let current = self.favorites_view.selected as isize;
        let target = current + dx + dy * FAVORITES_COLUMNS as isize;
        if (0..len as isize).contains(&target) {
            self.favorites_view.selected = target as usize;
        }
    }

    /// Ask for confirmation before removing the selected favorite.
    pub fn request_remove_favorite(&mut self) {
        if let Some(photo) = self.state.favorites.get(self.favorites_view.selected) {
            self.favorites_view.confirm_delete = Some(photo.id);
        }
    }

    pub fn confirm_remove_favorite(&mut self) {
        if let Some(id) = self.favorites_view.confirm_delete.take() {
            self.dispatch(Action::RemoveFavorite(id));
            self.favorites_view.clamp(self.state.favorites.len());
        }
    }
}
