//! Common test utilities for integration tests.
//!
//! Fixtures for photos and configurations, plus helpers that drive the
//! swipe engine and the app the way the event loop does.
//!
//! # Example
//!
//! ```ignore
//! use common::{batch, threshold_100_engine};
//!
//! let mut engine = threshold_100_engine();
//! let photos = batch(&[1, 2, 3]);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use marsdeck::app::App;
use marsdeck::config::DeckConfig;
use marsdeck::deck::SwipeEngine;
use marsdeck::models::{Photo, SwipeOutcome};
use marsdeck::provider::RetryPolicy;

/// Frame length used when ticking animations in tests.
pub const FRAME: Duration = Duration::from_millis(16);

/// Viewport width that, with [`test_config`], gives a threshold of exactly 100.
pub const VIEWPORT_WIDTH: f64 = 200.0;

pub fn photo(id: u64) -> Photo {
    Photo::new(id, format!("https://mars.example.com/{}.jpg", id))
}

pub fn batch(ids: &[u64]) -> Vec<Photo> {
    ids.iter().map(|id| photo(*id)).collect()
}

/// Config with `T = 0.5 * 200 = 100` and no retries.
pub fn test_config() -> DeckConfig {
    DeckConfig::default()
        .with_threshold_ratio(0.5)
        .with_retry(RetryPolicy::none())
}

pub fn threshold_100_engine() -> SwipeEngine {
    SwipeEngine::new(VIEWPORT_WIDTH, &test_config())
}

/// Drag the top card by `dx` from a press at x = 0, then release.
pub fn drag_and_release(engine: &mut SwipeEngine, top: Photo, dx: f64) {
    engine.press(top, 0.0).expect("press accepted");
    engine.drag_to(dx);
    engine.release().expect("release accepted");
}

/// Tick until animations stop, collecting emitted outcomes.
pub fn settle(engine: &mut SwipeEngine) -> Vec<SwipeOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..1000 {
        if let Some(outcome) = engine.tick(FRAME) {
            outcomes.push(outcome);
        }
        if !engine.is_animating() {
            break;
        }
    }
    outcomes
}

/// App over a scripted source and a mock HTTP client that answers every
/// image probe with a small body.
pub fn test_app(source: marsdeck::adapters::ScriptedPhotoSource) -> App {
    let mut app = App::new(
        test_config(),
        Arc::new(source),
        Arc::new(MockHttpConfig::new().with_default_success(200, "jpeg").build()),
    );
    app.update_terminal_dimensions(VIEWPORT_WIDTH as u16, 40);
    app
}

/// Wait for the next async result and hand it to the app.
pub async fn pump_message(app: &mut App, rx: &mut tokio::sync::mpsc::UnboundedReceiver<marsdeck::app::AppMessage>) {
    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("message within timeout")
        .expect("channel open");
    app.handle_message(msg);
}
