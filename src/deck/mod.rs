//! The swipe-card interaction engine.
//!
//! - [`gesture`] - pointer samples to offset, release to commit/cancel
//! - [`model`] - windowed view of the loaded photos and pagination
//! - [`animator`] - card position animations with single-fire completion
//! - [`dispatcher`] - outcome emission, once per gesture
//! - [`engine`] - the three interactive parts composed
//!
//! ```text
//! press/drag ──► GestureTracker ──offset──► SwipeAnimator (position)
//!                     │ release                   │ tick(dt)
//!                     ▼                           ▼
//!               commit / cancel ──────────► Settled ──► OutcomeDispatcher ──► host
//! ```

pub mod animator;
pub mod dispatcher;
pub mod engine;
pub mod gesture;
pub mod latch;
pub mod model;

pub use animator::{ease_in_out, AnimationHandle, AnimationKind, Settled, SpringConfig, SwipeAnimator};
pub use dispatcher::OutcomeDispatcher;
pub use engine::SwipeEngine;
pub use gesture::{Gesture, GestureId, GesturePhase, GestureTracker, ReleaseDecision};
pub use latch::Latch;
pub use model::{CardDeckModel, DeckStatus, EmptyReason, ImageStatus, PaginationState, VisibleCard};
