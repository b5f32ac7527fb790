//! Deck screen rendering
//!
//! Draws the overlapping card stack back to front, the top card shifted by
//! the animator's position and labeled once it would commit.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::deck::{DeckStatus, EmptyReason, ImageStatus, VisibleCard};
use crate::models::Direction;

use super::helpers::{centered_rect, format_bytes, shift_rect, truncate_to_width, SPINNER_FRAMES};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CARD_BACK, COLOR_DIM, COLOR_DISCARD, COLOR_ERROR,
    COLOR_FAVORITE, COLOR_HEADER,
};

/// Widest a card gets, in columns
const MAX_CARD_WIDTH: u16 = 56;

/// Columns each deeper card is inset on both sides
const DEPTH_INSET: u16 = 2;

/// Render the deck body into `area`.
pub fn render_deck(frame: &mut Frame, app: &mut App, area: Rect) {
    app.top_card_area = None;

    match app.state.deck.status() {
        DeckStatus::Loading => {
            let spinner = SPINNER_FRAMES[(app.tick_count as usize / 4) % SPINNER_FRAMES.len()];
            render_message(
                frame,
                area,
                vec![Line::from(Span::styled(
                    format!("{} Downloading...", spinner),
                    Style::default().fg(COLOR_ACCENT),
                ))],
            );
        }
        DeckStatus::Empty(reason) => {
            let detail = match &reason {
                EmptyReason::FetchFailed(error) => error.user_message(),
                EmptyReason::NoMorePhotos => "No more photos.".to_string(),
            };
            render_message(
                frame,
                area,
                vec![
                    Line::from(Span::styled(
                        "No image to show",
                        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(detail, Style::default().fg(COLOR_DIM))),
                    Line::from(Span::styled(
                        "Press r to reload.",
                        Style::default().fg(COLOR_DIM),
                    )),
                ],
            );
        }
        DeckStatus::Ready => render_stack(frame, app, area),
    }
}

fn render_stack(frame: &mut Frame, app: &mut App, area: Rect) {
    let depth = app.state.deck.depth() as u16;
    let width = MAX_CARD_WIDTH.min(area.width.saturating_sub(4)).max(1);
    let height = area.height.saturating_sub(depth).max(1);
    let base = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height,
    };

    let offset = app.engine.offset().round() as i32;
    let label = app.engine.indicated_direction();
    let mut top_area = None;

    for card in app.state.deck.render_order() {
        let d = card.depth as u16;
        let rect = Rect {
            x: base.x + DEPTH_INSET * d,
            y: base.y + d,
            width: base.width.saturating_sub(2 * DEPTH_INSET * d),
            height: base.height,
        };
        if rect.width < 4 {
            continue;
        }

        if card.is_top() {
            let Some(shifted) = shift_rect(rect, offset, area) else {
                continue;
            };
            frame.render_widget(Clear, shifted);
            frame.render_widget(top_card(&card, label, shifted.width), shifted);
            top_area = Some(shifted);
        } else {
            frame.render_widget(Clear, rect);
            frame.render_widget(back_card(&card), rect);
        }
    }

    app.top_card_area = top_area;
}

fn top_card<'a>(card: &VisibleCard<'_>, label: Option<Direction>, width: u16) -> Paragraph<'a> {
    let (border_color, title) = match label {
        Some(Direction::Right) => (COLOR_FAVORITE, " FAVORITE "),
        Some(Direction::Left) => (COLOR_DISCARD, " DISCARD "),
        None => (COLOR_ACCENT, ""),
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(border_color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let text_width = width.saturating_sub(4) as usize;
    let image_line = match &card.image {
        ImageStatus::Pending | ImageStatus::Loading => {
            Line::from(Span::styled("Loading image...", Style::default().fg(COLOR_DIM)))
        }
        ImageStatus::Loaded { bytes } => Line::from(Span::styled(
            format!("[ image {} ]", format_bytes(*bytes)),
            Style::default().fg(COLOR_ACCENT),
        )),
        ImageStatus::Failed(_) => Line::from(Span::styled(
            "Couldn't load image.",
            Style::default().fg(COLOR_ERROR),
        )),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Photo #{}", card.photo.id),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        image_line,
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width(&card.photo.image_url, text_width),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
}

fn back_card<'a>(card: &VisibleCard<'_>) -> Paragraph<'a> {
    // Only the bottom edge of a back card peeks out from under the stack.
    let block = Block::default()
        .title_bottom(Span::styled(
            format!(" #{} ", card.photo.id),
            Style::default().fg(COLOR_DIM),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_CARD_BACK));
    Paragraph::new("").block(block)
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = lines.len() as u16;
    let rect = centered_rect(area, area.width, height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_BORDER)),
        rect,
    );
}
