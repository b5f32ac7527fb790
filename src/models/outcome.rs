//! Swipe direction and outcome.

use super::Photo;

/// Horizontal direction a card is thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Discard
    Left,
    /// Favorite
    Right,
}

impl Direction {
    /// Sign of the off-screen resting offset for this direction.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Commit direction for a release displacement, or `None` when the
    /// displacement does not strictly exceed `threshold`.
    pub fn from_displacement(displacement: f64, threshold: f64) -> Option<Self> {
        if displacement > threshold {
            Some(Direction::Right)
        } else if displacement < -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

/// Result of a committed swipe. Produced at most once per gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome {
    Favorite(Photo),
    Discard(Photo),
}

impl SwipeOutcome {
    pub fn new(direction: Direction, photo: Photo) -> Self {
        match direction {
            Direction::Right => SwipeOutcome::Favorite(photo),
            Direction::Left => SwipeOutcome::Discard(photo),
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            SwipeOutcome::Favorite(_) => Direction::Right,
            SwipeOutcome::Discard(_) => Direction::Left,
        }
    }

    pub fn photo(&self) -> &Photo {
        match self {
            SwipeOutcome::Favorite(photo) | SwipeOutcome::Discard(photo) => photo,
        }
    }

    pub fn into_photo(self) -> Photo {
        match self {
            SwipeOutcome::Favorite(photo) | SwipeOutcome::Discard(photo) => photo,
        }
    }

    pub fn is_favorite(&self) -> bool {
        matches!(self, SwipeOutcome::Favorite(_))
    }
}
