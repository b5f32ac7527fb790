//! Color theme constants for the deck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the top card
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Cards behind the top card
pub const COLOR_CARD_BACK: Color = Color::Gray;

// ============================================================================
// Swipe Colors
// ============================================================================

/// Favorite (right) label and border
pub const COLOR_FAVORITE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Discard (left) label and border
pub const COLOR_DISCARD: Color = Color::Red;

/// Image load failure text
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for dialog boxes (photo overlay, delete confirmation)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Selected grid cell border
pub const COLOR_SELECTED: Color = Color::Cyan;
