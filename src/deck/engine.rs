//! The swipe engine: gesture tracking, animation and dispatch in one place.

use std::time::Duration;

use super::animator::{AnimationHandle, AnimationKind, Settled, SwipeAnimator};
use super::dispatcher::OutcomeDispatcher;
use super::gesture::{GestureId, GesturePhase, GestureTracker, ReleaseDecision};
use crate::config::DeckConfig;
use crate::models::{Direction, Photo, SwipeOutcome};

/// Per-gesture state machine for the top card:
/// `Idle -> Dragging -> { Resolving -> Settled | Idle }`.
///
/// The host feeds pointer samples and frame ticks in, and receives at most
/// one [`SwipeOutcome`] per committed gesture back from [`tick`](Self::tick)
/// or [`settle`](Self::settle).
#[derive(Debug)]
pub struct SwipeEngine {
    tracker: GestureTracker,
    animator: SwipeAnimator,
    dispatcher: OutcomeDispatcher,
}

impl SwipeEngine {
    pub fn new(viewport_width: f64, config: &DeckConfig) -> Self {
        Self {
            tracker: GestureTracker::new(viewport_width, config.threshold_ratio),
            animator: SwipeAnimator::new(viewport_width, config.commit_duration, config.spring),
            dispatcher: OutcomeDispatcher::new(),
        }
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.tracker.set_viewport_width(width);
        self.animator.set_viewport_width(width);
    }

    pub fn viewport_width(&self) -> f64 {
        self.animator.viewport_width()
    }

    pub fn threshold(&self) -> f64 {
        self.tracker.threshold()
    }

    /// Current horizontal offset of the top card.
    pub fn offset(&self) -> f64 {
        self.animator.position()
    }

    pub fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    /// Whether a commit is in flight (new swipes are refused).
    pub fn is_resolving(&self) -> bool {
        self.tracker.phase() == GesturePhase::Resolving
    }

    /// Whether the card is moving on its own (commit or spring-back).
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Direction the card would commit to if released now.
    pub fn pending_direction(&self) -> Option<Direction> {
        match self.phase() {
            GesturePhase::Dragging => Direction::from_displacement(self.offset(), self.threshold()),
            _ => None,
        }
    }

    /// Direction to label the top card with: where it would go if released
    /// now, or where it is flying.
    pub fn indicated_direction(&self) -> Option<Direction> {
        match self.animator.animating() {
            Some(AnimationKind::Commit(direction)) => Some(direction),
            _ => self.pending_direction(),
        }
    }

    pub fn outcomes_emitted(&self) -> u64 {
        self.dispatcher.emitted()
    }

    /// Press on the top card at `pointer_x`.
    pub fn press(&mut self, photo: Photo, pointer_x: f64) -> Option<GestureId> {
        let id = self.tracker.begin(photo, pointer_x, self.animator.position())?;
        // Grabbing a card that is springing back stops the spring where it is.
        let at = self.animator.position();
        self.animator.set_position(at);
        Some(id)
    }

    /// Pointer moved to `pointer_x` while pressed.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<f64> {
        let offset = self.tracker.drag_to(pointer_x)?;
        self.animator.set_position(offset);
        Some(offset)
    }

    /// Keyboard drag by `delta`.
    pub fn drag_by(&mut self, delta: f64) -> Option<f64> {
        let offset = self.tracker.drag_by(delta)?;
        self.animator.set_position(offset);
        Some(offset)
    }

    /// Pointer released: commit or spring back.
    pub fn release(&mut self) -> Option<AnimationHandle> {
        let (id, decision) = self.tracker.release()?;
        let handle = match decision {
            ReleaseDecision::Commit(direction) => self.animator.resolve(id, direction),
            ReleaseDecision::Cancel => self.animator.cancel(id),
        };
        Some(handle)
    }

    /// Action-button swipe: commit `photo` toward `direction` immediately.
    pub fn swipe(&mut self, photo: Photo, direction: Direction) -> Option<AnimationHandle> {
        let id = self
            .tracker
            .commit(photo, direction, self.animator.position())?;
        Some(self.animator.resolve(id, direction))
    }

    /// Advance animations by `dt`; returns an outcome when a commit settles.
    pub fn tick(&mut self, dt: Duration) -> Option<SwipeOutcome> {
        let settled = self.animator.tick(dt)?;
        self.settle(settled)
    }

    /// Completion path for a settled animation.
    ///
    /// Calling this again for the same settle yields nothing: the gesture
    /// was handed over on the first call and its latch has fired.
    pub fn settle(&mut self, settled: Settled) -> Option<SwipeOutcome> {
        match settled.kind {
            AnimationKind::Cancel => None,
            AnimationKind::Commit(_) => match self.tracker.finish(settled.gesture) {
                Some(mut gesture) => {
                    // The next top card starts centered.
                    self.animator.reset();
                    self.dispatcher.dispatch(&mut gesture)
                }
                None => {
                    self.dispatcher.record_duplicate();
                    None
                }
            },
        }
    }

    /// Drop any gesture and animation (deck reloaded or emptied).
    pub fn abandon(&mut self) {
        self.tracker.abandon();
        self.animator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn engine() -> SwipeEngine {
        // T = 0.3 * 1000 / 3 = 100
        SwipeEngine::new(1000.0 / 3.0, &DeckConfig::default())
    }

    fn photo(id: u64) -> Photo {
        Photo::new(id, format!("https://img/{}.jpg", id))
    }

    fn run(engine: &mut SwipeEngine) -> Vec<SwipeOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..500 {
            if let Some(outcome) = engine.tick(FRAME) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    #[test]
    fn test_drag_right_past_threshold_favorites() {
        let mut engine = engine();
        engine.press(photo(1), 0.0).unwrap();
        engine.drag_to(150.0);
        assert_eq!(engine.pending_direction(), Some(Direction::Right));
        engine.release().unwrap();
        assert!(engine.is_resolving());

        assert_eq!(run(&mut engine), vec![SwipeOutcome::Favorite(photo(1))]);
        assert_eq!(engine.phase(), GesturePhase::Idle);
        assert_eq!(engine.offset(), 0.0);
    }

    #[test]
    fn test_drag_left_past_threshold_discards() {
        let mut engine = engine();
        engine.press(photo(1), 200.0).unwrap();
        engine.drag_to(50.0);
        engine.release().unwrap();

        assert_eq!(run(&mut engine), vec![SwipeOutcome::Discard(photo(1))]);
    }

    #[test]
    fn test_below_threshold_returns_to_center() {
        let mut engine = engine();
        engine.press(photo(1), 0.0).unwrap();
        engine.drag_to(50.0);
        assert_eq!(engine.offset(), 50.0);
        assert_eq!(engine.pending_direction(), None);
        engine.release().unwrap();
        assert_eq!(engine.phase(), GesturePhase::Idle);

        assert!(run(&mut engine).is_empty());
        assert_eq!(engine.offset(), 0.0);
        assert_eq!(engine.outcomes_emitted(), 0);
    }

    #[test]
    fn test_double_settle_emits_once() {
        let mut engine = engine();
        engine.swipe(photo(1), Direction::Right).unwrap();

        let mut settled = None;
        for _ in 0..100 {
            if let Some(s) = engine.animator.tick(FRAME) {
                settled = Some(s);
                break;
            }
        }
        let settled = settled.expect("commit settles");

        assert_eq!(
            engine.settle(settled),
            Some(SwipeOutcome::Favorite(photo(1)))
        );
        assert_eq!(engine.settle(settled), None);
        assert_eq!(engine.outcomes_emitted(), 1);
    }

    #[test]
    fn test_no_second_swipe_while_resolving() {
        let mut engine = engine();
        engine.swipe(photo(1), Direction::Left).unwrap();
        assert!(engine.swipe(photo(2), Direction::Right).is_none());
        assert!(engine.press(photo(2), 0.0).is_none());

        assert_eq!(run(&mut engine), vec![SwipeOutcome::Discard(photo(1))]);
        assert!(engine.swipe(photo(2), Direction::Right).is_some());
    }

    #[test]
    fn test_grab_during_spring_continues_from_position() {
        let mut engine = engine();
        engine.press(photo(1), 0.0).unwrap();
        engine.drag_to(80.0);
        engine.release().unwrap();
        engine.tick(FRAME);
        let mid = engine.offset();
        assert!(mid > 0.0 && mid < 80.0);

        engine.press(photo(1), 500.0).unwrap();
        assert_eq!(engine.offset(), mid);
        engine.drag_to(500.0 + 100.0);
        assert!((engine.offset() - (mid + 100.0)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_release_handle_resolves() {
        let mut engine = engine();
        engine.press(photo(1), 0.0).unwrap();
        engine.drag_to(-140.0);
        let handle = engine.release().unwrap();
        let waiter = tokio::spawn(handle);

        let outcomes = run(&mut engine);
        assert_eq!(outcomes, vec![SwipeOutcome::Discard(photo(1))]);

        let settled = waiter.await.unwrap().unwrap();
        assert_eq!(settled.kind, AnimationKind::Commit(Direction::Left));
    }
}
