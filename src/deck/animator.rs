//! Card position animation.
//!
//! The animator owns the top card's horizontal position. It is driven by
//! `tick(dt)` from the event loop, so it is deterministic under test. Every
//! animation carries a `oneshot` sender that is consumed when the animation
//! settles; a settle can therefore be reported at most once.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::sync::oneshot;

use super::gesture::GestureId;
use crate::models::Direction;

/// Springs that have not come to rest by then are snapped to target.
const MAX_SPRING_DURATION: Duration = Duration::from_secs(3);

/// Integration step for the spring simulation.
const SPRING_STEP: Duration = Duration::from_millis(1);

/// Physical parameters of the cancel spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Displacement below which the spring may rest
    pub rest_displacement: f64,
    /// Speed below which the spring may rest
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 230.0,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.5,
            rest_speed: 0.5,
        }
    }
}

/// What an animation was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Fly off-screen in `Direction`
    Commit(Direction),
    /// Return to center
    Cancel,
}

/// Completion report of one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub gesture: GestureId,
    pub kind: AnimationKind,
}

/// Future resolving when its animation settles.
///
/// Resolves to `None` if the animation was interrupted (the card was
/// grabbed mid-spring) or the animator was dropped.
#[derive(Debug)]
pub struct AnimationHandle {
    rx: oneshot::Receiver<Settled>,
}

impl AnimationHandle {
    /// Non-blocking check for completion.
    pub fn try_settled(&mut self) -> Option<Settled> {
        self.rx.try_recv().ok()
    }
}

impl Future for AnimationHandle {
    type Output = Option<Settled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(Result::ok)
    }
}

#[derive(Debug)]
enum Motion {
    Timed {
        from: f64,
        to: f64,
        elapsed: Duration,
        duration: Duration,
    },
    Spring {
        velocity: f64,
        elapsed: Duration,
    },
}

#[derive(Debug)]
struct Animation {
    gesture: GestureId,
    kind: AnimationKind,
    motion: Motion,
    done: oneshot::Sender<Settled>,
}

/// Drives the top card between center and its off-screen resting places.
#[derive(Debug)]
pub struct SwipeAnimator {
    position: f64,
    viewport_width: f64,
    commit_duration: Duration,
    spring: SpringConfig,
    active: Option<Animation>,
}

impl SwipeAnimator {
    pub fn new(viewport_width: f64, commit_duration: Duration, spring: SpringConfig) -> Self {
        Self {
            position: 0.0,
            viewport_width,
            commit_duration,
            spring,
            active: None,
        }
    }

    /// Current horizontal offset of the top card.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Kind of the running animation, if any.
    pub fn animating(&self) -> Option<AnimationKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    /// Publish a live drag offset. Interrupts a running animation.
    pub fn set_position(&mut self, x: f64) {
        if let Some(animation) = self.active.take() {
            tracing::debug!(gesture = %animation.gesture, "Animation interrupted by drag");
        }
        self.position = x;
    }

    /// Snap back to center without animating (new top card).
    pub fn reset(&mut self) {
        self.active = None;
        self.position = 0.0;
    }

    /// Animate off-screen toward `direction` over the commit duration.
    pub fn resolve(&mut self, gesture: GestureId, direction: Direction) -> AnimationHandle {
        let motion = Motion::Timed {
            from: self.position,
            to: direction.sign() * self.viewport_width,
            elapsed: Duration::ZERO,
            duration: self.commit_duration,
        };
        self.start(gesture, AnimationKind::Commit(direction), motion)
    }

    /// Spring back to center.
    pub fn cancel(&mut self, gesture: GestureId) -> AnimationHandle {
        let motion = Motion::Spring {
            velocity: 0.0,
            elapsed: Duration::ZERO,
        };
        self.start(gesture, AnimationKind::Cancel, motion)
    }

    /// Advance the running animation by `dt`.
    ///
    /// Returns the settle report on the tick the animation finishes; the
    /// same report is delivered to its [`AnimationHandle`].
    pub fn tick(&mut self, dt: Duration) -> Option<Settled> {
        let animation = self.active.as_mut()?;

        let finished = match &mut animation.motion {
            Motion::Timed {
                from,
                to,
                elapsed,
                duration,
            } => {
                *elapsed += dt;
                let t = if duration.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
                };
                self.position = *from + (*to - *from) * ease_in_out(t);
                if t >= 1.0 {
                    self.position = *to;
                    true
                } else {
                    false
                }
            }
            Motion::Spring { velocity, elapsed } => {
                let spring = self.spring;
                let mut remaining = dt;
                let mut at_rest = false;

                while !remaining.is_zero() {
                    let step = remaining.min(SPRING_STEP);
                    remaining -= step;
                    *elapsed += step;

                    let h = step.as_secs_f64();
                    let force = -spring.stiffness * self.position - spring.damping * *velocity;
                    *velocity += force / spring.mass * h;
                    self.position += *velocity * h;

                    if self.position.abs() < spring.rest_displacement
                        && velocity.abs() < spring.rest_speed
                    {
                        at_rest = true;
                        break;
                    }
                }

                if at_rest || *elapsed >= MAX_SPRING_DURATION {
                    self.position = 0.0;
                    true
                } else {
                    false
                }
            }
        };

        if !finished {
            return None;
        }

        let animation = self.active.take()?;
        let settled = Settled {
            gesture: animation.gesture,
            kind: animation.kind,
        };
        // Nobody awaiting the handle is fine; the tick result still reports it.
        let _ = animation.done.send(settled);
        tracing::debug!(gesture = %settled.gesture, kind = ?settled.kind, "Animation settled");
        Some(settled)
    }

    fn start(&mut self, gesture: GestureId, kind: AnimationKind, motion: Motion) -> AnimationHandle {
        if let Some(previous) = self.active.take() {
            tracing::warn!(
                previous = %previous.gesture,
                next = %gesture,
                "Replacing an animation that was still running"
            );
        }

        let (done, rx) = oneshot::channel();
        self.active = Some(Animation {
            gesture,
            kind,
            motion,
            done,
        });
        AnimationHandle { rx }
    }
}

/// Quadratic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
