//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for formatting, truncation, and layout.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for the loading status
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Shift `rect` horizontally by `dx` columns, clipped to `bounds`.
///
/// Returns `None` once the rect has left `bounds` entirely.
pub fn shift_rect(rect: Rect, dx: i32, bounds: Rect) -> Option<Rect> {
    let left = i32::from(rect.x) + dx;
    let right = left + i32::from(rect.width);
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.x) + i32::from(bounds.width);

    let clipped_left = left.max(min_x);
    let clipped_right = right.min(max_x);
    if clipped_right <= clipped_left {
        return None;
    }
    Some(Rect {
        x: clipped_left as u16,
        y: rect.y,
        width: (clipped_right - clipped_left) as u16,
        height: rect.height,
    })
}

/// Truncate `s` to at most `max_width` display columns, adding "..." if
/// truncated.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

/// Format a byte count (e.g., 1536 -> "1.5 KB")
pub fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}
