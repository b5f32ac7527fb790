//! Application state container.
//!
//! - [`AppState`] - deck, favorites and undo, changed only through
//!   [`AppState::update`]
//! - [`FavoritesSet`] - insertion-ordered favorites

pub mod favorites;
pub mod store;

pub use favorites::FavoritesSet;
pub use store::{Action, AppState, Effect};
