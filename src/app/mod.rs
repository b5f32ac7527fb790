//! Application state and logic for the terminal deck.
//!
//! [`App`] owns the [`AppState`] container and the [`SwipeEngine`], runs
//! the effects that state transitions request, and feeds their results back
//! in through [`AppMessage`]s.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{FavoritesView, Screen, FAVORITES_COLUMNS};

use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::config::DeckConfig;
use crate::deck::SwipeEngine;
use crate::provider::probe_image;
use crate::state::{Action, AppState, Effect};
use crate::traits::{HttpClient, PhotoSource};

/// Width assumed until the first resize event arrives.
const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

/// Main application state
pub struct App {
    /// Deck, favorites and undo
    pub state: AppState,
    /// Gesture, animation and dispatch for the top card
    pub engine: SwipeEngine,
    pub config: DeckConfig,
    /// Current screen being displayed
    pub screen: Screen,
    pub favorites_view: FavoritesView,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub source: Arc<dyn PhotoSource>,
    /// Used for image probes
    pub http: Arc<dyn HttpClient>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Where the top card was last drawn; mouse presses are tested against it
    pub top_card_area: Option<Rect>,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
}

impl App {
    pub fn new(config: DeckConfig, source: Arc<dyn PhotoSource>, http: Arc<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let state = AppState::new(config.start_page, config.display_depth);
        let engine = SwipeEngine::new(f64::from(DEFAULT_WIDTH), &config);

        Self {
            state,
            engine,
            config,
            screen: Screen::Deck,
            favorites_view: FavoritesView::default(),
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            source,
            http,
            terminal_width: DEFAULT_WIDTH,
            terminal_height: DEFAULT_HEIGHT,
            top_card_area: None,
            tick_count: 0,
        }
    }

    /// Kick off the first page fetch.
    pub fn start(&mut self) {
        self.dispatch(Action::Start);
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Apply `action` to the state and run the effects it asks for.
    pub fn dispatch(&mut self, action: Action) {
        let effects = self.state.update(action);
        self.run_effects(effects);
        self.mark_dirty();
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(page) => {
                    let source = Arc::clone(&self.source);
                    let tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let result = source.fetch_photos(page).await;
                        let _ = tx.send(AppMessage::PhotosFetched { page, result });
                    });
                }
                Effect::ProbeImage { id, url } => {
                    let http = Arc::clone(&self.http);
                    let tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let result = probe_image(http.as_ref(), &url).await;
                        let _ = tx.send(AppMessage::ImageProbed { id, result });
                    });
                }
            }
        }
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.engine.is_animating() {
            self.mark_dirty();
        }
        if let Some(outcome) = self.engine.tick(dt) {
            self.dispatch(Action::Swiped(outcome));
        }
        if self.state.deck.is_fetching() {
            // spinner
            self.mark_dirty();
        }
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.engine.set_viewport_width(f64::from(width.max(1)));
        self.mark_dirty();
    }
}
