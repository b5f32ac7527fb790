//! UI rendering for the terminal deck
//!
//! - Header with the screen tabs
//! - Body: the card stack or the favorites grid
//! - Status line ("Downloading..." / "<n> cards" / "No image to show") and
//!   keybind hints

mod deck;
mod favorites;
mod helpers;
mod theme;

pub use helpers::{format_bytes, truncate_to_width};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISCARD, COLOR_FAVORITE};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use deck::render_deck;
use favorites::render_favorites;
use theme::COLOR_HEADER;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, status, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header);
    match app.screen {
        Screen::Deck => render_deck(frame, app, body),
        Screen::Favorites => {
            app.top_card_area = None;
            render_favorites(frame, app, body);
        }
    }
    render_status(frame, app, status);
    render_hints(frame, app, hints);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(label, Style::default().fg(COLOR_DIM))
        }
    };

    let line = Line::from(vec![
        Span::styled(
            " MARS DECK ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        tab("Deck", app.screen == Screen::Deck),
        Span::styled(" │ ", Style::default().fg(COLOR_BORDER)),
        tab(
            if app.state.favorites.is_empty() { "Favorites" } else { "Favorites ★" },
            app.screen == Screen::Favorites,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = match app.screen {
        Screen::Deck => vec![Span::styled(
            format!(" {}", app.state.deck.status_text()),
            Style::default().fg(COLOR_ACCENT),
        )],
        Screen::Favorites => vec![Span::styled(
            format!(" {} favorites", app.state.favorites.len()),
            Style::default().fg(COLOR_ACCENT),
        )],
    };

    if app.screen == Screen::Deck && app.state.can_undo() {
        spans.push(Span::styled("  · undo available", Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Deck => " ←/→ drag  space release  h discard  l favorite  u undo  r reload  tab favorites  q quit",
        Screen::Favorites if app.favorites_view.confirm_delete.is_some() => " y remove  n cancel",
        Screen::Favorites if app.favorites_view.overlay => " esc close",
        Screen::Favorites => " arrows select  enter open  d remove  tab deck  q quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
