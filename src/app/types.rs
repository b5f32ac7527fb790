//! Type definitions for the application's view state.
//!
//! - [`Screen`] - which screen is displayed
//! - [`FavoritesView`] - selection and dialogs of the favorites grid

use crate::models::PhotoId;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Deck,
    Favorites,
}

/// Number of columns in the favorites grid.
pub const FAVORITES_COLUMNS: usize = 3;

/// Favorites grid state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesView {
    /// Selected cell, row-major
    pub selected: usize,
    /// Full-screen overlay of the selected photo is open
    pub overlay: bool,
    /// Photo awaiting delete confirmation
    pub confirm_delete: Option<PhotoId>,
}

impl FavoritesView {
    /// Keep the selection inside a grid of `len` cells.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        if len == 0 {
            self.overlay = false;
        }
    }
}
