//! Favorites grid rendering
//!
//! Three-column grid of favorited photos, a full-screen overlay for the
//! selected photo and the delete confirmation dialog.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FAVORITES_COLUMNS};

use super::helpers::{centered_rect, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_DISCARD, COLOR_HEADER,
    COLOR_SELECTED,
};

/// Rows per grid cell, borders included
const CELL_HEIGHT: u16 = 4;

pub fn render_favorites(frame: &mut Frame, app: &App, area: Rect) {
    let favorites = app.state.favorites.list();
    if favorites.is_empty() {
        let rect = centered_rect(area, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("No favorites yet.", Style::default().fg(COLOR_DIM)))
                .alignment(Alignment::Center),
            rect,
        );
        return;
    }

    let columns = FAVORITES_COLUMNS as u16;
    let cell_width = area.width / columns;
    let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;
    let selected_row = app.favorites_view.selected / FAVORITES_COLUMNS;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    for (index, photo) in favorites.iter().enumerate() {
        let row = index / FAVORITES_COLUMNS;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = (index % FAVORITES_COLUMNS) as u16;
        let cell = Rect {
            x: area.x + col * cell_width,
            y: area.y + (row - first_row) as u16 * CELL_HEIGHT,
            width: cell_width,
            height: CELL_HEIGHT,
        };

        let selected = index == app.favorites_view.selected;
        let border_color = if selected { COLOR_SELECTED } else { COLOR_BORDER };
        let block = Block::default()
            .title(Span::styled(
                format!(" #{} ", photo.id),
                Style::default().fg(if selected { COLOR_SELECTED } else { COLOR_HEADER }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let url = truncate_to_width(&photo.image_url, cell_width.saturating_sub(2) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(url, Style::default().fg(COLOR_DIM))))
                .block(block),
            cell,
        );
    }

    if app.favorites_view.overlay {
        render_overlay(frame, app, area);
    }
    if app.favorites_view.confirm_delete.is_some() {
        render_confirm_delete(frame, app);
    }
}

/// Full-screen view of the selected photo
fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(photo) = app.state.favorites.get(app.favorites_view.selected) else {
        return;
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" Photo #{} ", photo.id),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            photo.image_url.clone(),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled("Esc to close", Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_confirm_delete(frame: &mut Frame, app: &App) {
    let Some(id) = app.favorites_view.confirm_delete else {
        return;
    };

    let dialog = centered_rect(frame.area(), 44, 6);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(Span::styled(
            " Remove favorite ",
            Style::default().fg(COLOR_DISCARD).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_DISCARD))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let lines = vec![
        Line::from(""),
        Line::from(format!("Remove photo #{} from favorites?", id)),
        Line::from(""),
        Line::from(Span::styled("y remove · n cancel", Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        dialog,
    );
}
