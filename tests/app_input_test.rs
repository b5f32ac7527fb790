//! Keyboard and mouse input driving the deck through the App.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use marsdeck::app::{App, AppMessage, Screen};
use marsdeck::error::FetchError;
use marsdeck::deck::GesturePhase;
use marsdeck::state::Action;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn loaded_app(ids: &[u64]) -> App {
    let mut app = test_app(ScriptedPhotoSource::new());
    app.state.update(Action::Start);
    app.state.update(Action::PhotosLoaded {
        page: 1,
        result: Ok(batch(ids)),
    });
    app
}

fn run_frames(app: &mut App) {
    for _ in 0..300 {
        app.tick(FRAME);
        if !app.engine.is_animating() {
            break;
        }
    }
}

fn draw(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
    terminal.draw(|f| marsdeck::ui::render(f, app)).unwrap();
}

#[tokio::test]
async fn test_button_keys_favorite_and_discard() {
    let mut app = loaded_app(&[1, 2, 3]);

    app.handle_key(key(KeyCode::Char('l')));
    assert_eq!(app.engine.phase(), GesturePhase::Resolving);
    // Second press while the first card is still flying is ignored.
    app.handle_key(key(KeyCode::Char('h')));
    run_frames(&mut app);

    assert!(app.state.favorites.contains(1));
    assert_eq!(app.state.deck.top(), Some(&photo(2)));

    app.handle_key(key(KeyCode::Char('h')));
    run_frames(&mut app);
    assert_eq!(app.state.favorites.len(), 1);
    assert_eq!(app.state.deck.top(), Some(&photo(3)));
}

#[tokio::test]
async fn test_arrow_drag_then_release() {
    let mut app = loaded_app(&[1, 2]);

    // Each step is 5% of 200 = 10 columns; 11 steps pass T = 100.
    for _ in 0..11 {
        app.handle_key(key(KeyCode::Right));
    }
    assert!(app.engine.offset() > 100.0);
    app.handle_key(key(KeyCode::Char(' ')));
    run_frames(&mut app);

    assert!(app.state.favorites.contains(1));
}

#[tokio::test]
async fn test_short_arrow_drag_springs_back() {
    let mut app = loaded_app(&[1, 2]);

    for _ in 0..3 {
        app.handle_key(key(KeyCode::Left));
    }
    app.handle_key(key(KeyCode::Enter));
    run_frames(&mut app);

    assert_eq!(app.engine.offset(), 0.0);
    assert_eq!(app.state.deck.top(), Some(&photo(1)));
    assert_eq!(app.engine.outcomes_emitted(), 0);
}

#[tokio::test]
async fn test_mouse_drag_on_top_card() {
    let mut app = loaded_app(&[1, 2]);
    draw(&mut app);
    let area = app.top_card_area.expect("top card drawn");
    // Grab near the right edge so the drag stays on screen.
    let (x, y) = (area.x + area.width - 1, area.y + 2);
    assert!(x >= 120);

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
    assert_eq!(app.engine.phase(), GesturePhase::Dragging);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), x - 40, y));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), x - 120, y));
    assert_eq!(app.engine.offset(), -120.0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x - 120, y));
    run_frames(&mut app);

    assert!(app.state.favorites.is_empty());
    assert_eq!(app.state.deck.top(), Some(&photo(2)));
}

#[tokio::test]
async fn test_mouse_press_outside_card_is_ignored() {
    let mut app = loaded_app(&[1]);
    draw(&mut app);

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
    assert_eq!(app.engine.phase(), GesturePhase::Idle);
}

#[tokio::test]
async fn test_undo_key_restores_favorite() {
    let mut app = loaded_app(&[1, 2]);
    app.handle_key(key(KeyCode::Char('l')));
    run_frames(&mut app);

    app.handle_key(key(KeyCode::Char('u')));
    assert!(!app.state.favorites.contains(1));
    assert_eq!(app.state.deck.top(), Some(&photo(1)));
}

#[tokio::test]
async fn test_favorites_screen_delete_flow() {
    let mut app = loaded_app(&[1, 2, 3]);
    app.handle_key(key(KeyCode::Char('l')));
    run_frames(&mut app);
    app.handle_key(key(KeyCode::Char('l')));
    run_frames(&mut app);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.screen, Screen::Favorites);

    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Enter));
    assert!(app.favorites_view.overlay);
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.favorites_view.overlay);

    app.handle_key(key(KeyCode::Char('d')));
    assert_eq!(app.favorites_view.confirm_delete, Some(2));
    app.handle_key(key(KeyCode::Char('n')));
    assert_eq!(app.state.favorites.len(), 2);

    app.handle_key(key(KeyCode::Delete));
    app.handle_key(key(KeyCode::Char('y')));
    let remaining: Vec<u64> = app.state.favorites.iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![1]);
    assert_eq!(app.favorites_view.selected, 0);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.screen, Screen::Deck);
}

#[tokio::test]
async fn test_reload_during_fetch_keeps_flying_card() {
    let mut app = loaded_app(&[1, 2]);
    assert_eq!(app.state.deck.begin_fetch(), Some(2));

    app.handle_key(key(KeyCode::Char('l')));
    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.engine.phase(), GesturePhase::Resolving);
    run_frames(&mut app);

    assert!(app.state.favorites.contains(1));
    assert_eq!(app.state.deck.top(), Some(&photo(2)));
    assert_eq!(app.engine.outcomes_emitted(), 1);
}

#[tokio::test]
async fn test_stale_fetch_error_keeps_drag() {
    let mut app = loaded_app(&[1, 2]);
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Right));
    }

    app.handle_message(AppMessage::PhotosFetched {
        page: 7,
        result: Err(FetchError::Network {
            message: "connection reset".to_string(),
        }),
    });

    assert_eq!(app.engine.phase(), GesturePhase::Dragging);
    assert_eq!(app.engine.offset(), 30.0);
    assert_eq!(app.state.deck.top(), Some(&photo(1)));
}

#[tokio::test]
async fn test_in_flight_fetch_error_drops_drag() {
    let mut app = loaded_app(&[1, 2]);
    assert_eq!(app.state.deck.begin_fetch(), Some(2));
    app.handle_key(key(KeyCode::Left));

    app.handle_message(AppMessage::PhotosFetched {
        page: 2,
        result: Err(FetchError::Network {
            message: "connection reset".to_string(),
        }),
    });

    assert_eq!(app.engine.phase(), GesturePhase::Idle);
    assert!(app.state.deck.top().is_none());
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = loaded_app(&[1]);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    let mut app = loaded_app(&[1]);
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
