//! Input and message handlers for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage, Screen};
use crate::deck::GesturePhase;
use crate::models::Direction;
use crate::state::Action;

/// Keyboard drag step as a fraction of the viewport width.
const KEY_DRAG_STEP: f64 = 0.05;

impl App {
    /// Handle a result from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PhotosFetched { page, result } => {
                if result.is_err() && self.state.deck.awaits_page(page) {
                    // The card under a drag is gone with the rest of the deck.
                    self.engine.abandon();
                }
                self.dispatch(Action::PhotosLoaded { page, result });
            }
            AppMessage::ImageProbed { id, result } => match result {
                Ok(bytes) => self.dispatch(Action::ImageLoaded { id, bytes }),
                Err(error) => self.dispatch(Action::ImageFailed { id, error }),
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Deck => self.handle_deck_key(key),
            Screen::Favorites => self.handle_favorites_key(key),
        }
    }

    fn handle_deck_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char('f') => self.open_favorites(),
            KeyCode::Left => self.key_drag(-1.0),
            KeyCode::Right => self.key_drag(1.0),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.engine.release();
            }
            KeyCode::Char('h') => self.button_swipe(Direction::Left),
            KeyCode::Char('l') => self.button_swipe(Direction::Right),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) {
        if self.favorites_view.confirm_delete.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_remove_favorite(),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.favorites_view.confirm_delete = None;
                }
                _ => {}
            }
            return;
        }

        if self.favorites_view.overlay {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.favorites_view.overlay = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char('f') | KeyCode::Esc => self.open_deck(),
            KeyCode::Left => self.move_selection(-1, 0),
            KeyCode::Right => self.move_selection(1, 0),
            KeyCode::Up => self.move_selection(0, -1),
            KeyCode::Down => self.move_selection(0, 1),
            KeyCode::Enter => {
                if !self.state.favorites.is_empty() {
                    self.favorites_view.overlay = true;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.request_remove_favorite(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.screen != Screen::Deck {
            return;
        }
        let x = f64::from(event.column);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_top_card = self
                    .top_card_area
                    .is_some_and(|area| area.contains((event.column, event.row).into()));
                if !on_top_card {
                    return;
                }
                if let Some(photo) = self.state.deck.top().cloned() {
                    self.engine.press(photo, x);
                    self.mark_dirty();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.engine.drag_to(x).is_some() {
                    self.mark_dirty();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.engine.release().is_some() {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Arrow-key drag: the first press grabs the card.
    fn key_drag(&mut self, sign: f64) {
        if self.engine.phase() == GesturePhase::Idle {
            let Some(photo) = self.state.deck.top().cloned() else {
                return;
            };
            if self.engine.press(photo, 0.0).is_none() {
                return;
            }
        }
        let step = (self.engine.viewport_width() * KEY_DRAG_STEP).max(1.0);
        self.engine.drag_by(sign * step);
    }

    fn button_swipe(&mut self, direction: Direction) {
        if self.engine.phase() != GesturePhase::Idle {
            return;
        }
        if let Some(photo) = self.state.deck.top().cloned() {
            self.engine.swipe(photo, direction);
        }
    }

    fn undo(&mut self) {
        if self.engine.phase() != GesturePhase::Idle {
            return;
        }
        self.engine.abandon();
        self.dispatch(Action::Undo);
    }

    fn reload(&mut self) {
        // The deck refuses to reload mid-fetch; leave the gesture alone then.
        if self.state.deck.is_fetching() {
            tracing::debug!("Reload ignored while fetching");
            return;
        }
        self.engine.abandon();
        self.dispatch(Action::Reload);
    }
}
