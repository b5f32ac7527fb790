//! Domain models shared by the deck engine, the application state and the UI.
//!
//! - [`Photo`] - a single photograph as returned by the photo provider
//! - [`PhotoPage`] - the wire envelope of one provider page
//! - [`Direction`] - which way a card left the deck
//! - [`SwipeOutcome`] - the result of a committed swipe

mod outcome;
mod photo;

pub use outcome::{Direction, SwipeOutcome};
pub use photo::{Photo, PhotoId, PhotoPage};
