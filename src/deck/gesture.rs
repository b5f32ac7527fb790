//! Drag gesture tracking for the top card.
//!
//! The tracker turns pointer samples into a horizontal offset and, on
//! release, decides between commit and cancel. A gesture instance lives from
//! press until its commit animation settles; cancelled gestures end at
//! release.

use std::fmt;

use super::latch::Latch;
use crate::models::{Direction, Photo, SwipeOutcome};

/// Identifies one gesture instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GestureId(u64);

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gesture-{}", self.0)
    }
}

/// Phase of the top card's gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Resolving,
}

/// What a release means for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    Commit(Direction),
    Cancel,
}

/// A single press-to-settle interaction with the top card.
#[derive(Debug)]
pub struct Gesture {
    id: GestureId,
    photo: Photo,
    phase: GesturePhase,
    origin_x: f64,
    drag_offset_x: f64,
    outcome: Latch<SwipeOutcome>,
}

impl Gesture {
    pub fn id(&self) -> GestureId {
        self.id
    }

    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn drag_offset_x(&self) -> f64 {
        self.drag_offset_x
    }

    /// Take the committed outcome. Yields at most once per gesture.
    pub fn take_outcome(&mut self) -> Option<SwipeOutcome> {
        self.outcome.fire()
    }
}

/// Tracks the (at most one) active gesture.
#[derive(Debug)]
pub struct GestureTracker {
    threshold_ratio: f64,
    viewport_width: f64,
    next_id: u64,
    active: Option<Gesture>,
}

impl GestureTracker {
    pub fn new(viewport_width: f64, threshold_ratio: f64) -> Self {
        Self {
            threshold_ratio,
            viewport_width,
            next_id: 1,
            active: None,
        }
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Commit threshold `T` in viewport units.
    pub fn threshold(&self) -> f64 {
        self.threshold_ratio * self.viewport_width
    }

    pub fn phase(&self) -> GesturePhase {
        self.active
            .as_ref()
            .map(|g| g.phase)
            .unwrap_or(GesturePhase::Idle)
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Start dragging `photo`. `start_offset` is where the card already is
    /// (non-zero when grabbing a card that is springing back).
    ///
    /// Returns `None` if a gesture is already dragging or resolving.
    pub fn begin(&mut self, photo: Photo, pointer_x: f64, start_offset: f64) -> Option<GestureId> {
        if self.active.is_some() {
            tracing::debug!("Ignoring press: {:?} in progress", self.phase());
            return None;
        }

        let id = self.allocate_id();
        tracing::debug!(%id, photo_id = photo.id, "Gesture started");
        self.active = Some(Gesture {
            id,
            photo,
            phase: GesturePhase::Dragging,
            origin_x: pointer_x - start_offset,
            drag_offset_x: start_offset,
            outcome: Latch::disarmed(),
        });
        Some(id)
    }

    /// Move the pointer to `pointer_x`. Returns the new offset.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        let gesture = self.dragging_mut()?;
        gesture.drag_offset_x = pointer_x - gesture.origin_x;
        Some(gesture.drag_offset_x)
    }

    /// Shift the offset by `delta`. Returns the new offset.
    pub fn drag_by(&mut self, delta: f64) -> Option<f64> {
        let gesture = self.dragging_mut()?;
        gesture.origin_x -= delta;
        gesture.drag_offset_x += delta;
        Some(gesture.drag_offset_x)
    }

    /// Release the pointer.
    ///
    /// Commit moves the gesture to `Resolving` and arms its outcome latch.
    /// Cancel ends the gesture; the tracker is `Idle` again.
    pub fn release(&mut self) -> Option<(GestureId, ReleaseDecision)> {
        let threshold = self.threshold();
        let gesture = self.dragging_mut()?;
        let id = gesture.id;

        match Direction::from_displacement(gesture.drag_offset_x, threshold) {
            Some(direction) => {
                gesture.phase = GesturePhase::Resolving;
                gesture.outcome = Latch::armed(SwipeOutcome::new(direction, gesture.photo.clone()));
                tracing::debug!(%id, ?direction, offset = gesture.drag_offset_x, "Gesture committed");
                Some((id, ReleaseDecision::Commit(direction)))
            }
            None => {
                tracing::debug!(%id, offset = gesture.drag_offset_x, threshold, "Gesture cancelled");
                self.active = None;
                Some((id, ReleaseDecision::Cancel))
            }
        }
    }

    /// Commit `photo` without a drag (action buttons).
    pub fn commit(&mut self, photo: Photo, direction: Direction, start_offset: f64) -> Option<GestureId> {
        if self.active.is_some() {
            tracing::debug!("Ignoring button swipe: {:?} in progress", self.phase());
            return None;
        }

        let id = self.allocate_id();
        tracing::debug!(%id, photo_id = photo.id, ?direction, "Button swipe committed");
        let outcome = Latch::armed(SwipeOutcome::new(direction, photo.clone()));
        self.active = Some(Gesture {
            id,
            photo,
            phase: GesturePhase::Resolving,
            origin_x: 0.0,
            drag_offset_x: start_offset,
            outcome,
        });
        Some(id)
    }

    /// Hand over the resolving gesture `id`, ending it.
    ///
    /// Returns `None` if `id` is not the active resolving gesture, which is
    /// the case for any second settle of the same gesture.
    pub fn finish(&mut self, id: GestureId) -> Option<Gesture> {
        match &self.active {
            Some(g) if g.id == id && g.phase == GesturePhase::Resolving => self.active.take(),
            _ => None,
        }
    }

    /// Drop whatever gesture is active (deck reloaded underneath it).
    pub fn abandon(&mut self) {
        if let Some(gesture) = self.active.take() {
            tracing::debug!(id = %gesture.id, "Gesture abandoned");
        }
    }

    fn dragging_mut(&mut self) -> Option<&mut Gesture> {
        self.active
            .as_mut()
            .filter(|g| g.phase == GesturePhase::Dragging)
    }

    fn allocate_id(&mut self) -> GestureId {
        let id = GestureId(self.next_id);
        self.next_id += 1;
        id
    }
}
