//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles live here so the form,
//! the games dialog and the popups stay visually consistent.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Progress color of a finished game
pub const COLOR_COMPLETE: Color = Color::Green;

/// Progress color of a game still being played
pub const COLOR_IN_PROGRESS: Color = Color::Yellow;

/// Background of a row whose progress was just edited
pub const COLOR_ROW_FLASH_BG: Color = Color::Green;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for status and empty-state messages
pub const COLOR_STATUS: Color = Color::Yellow;

/// Color for error text
pub const COLOR_ERROR: Color = Color::Red;

/// Border color for danger/warning popups (removal confirmation, alerts)
pub const COLOR_BORDER_DANGER: Color = Color::Red;

/// Border color for informational popups
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of filter input when visible
pub const FILTER_INPUT_HEIGHT: u16 = 3;

/// Width of the progress bar column, in cells
pub const PROGRESS_BAR_WIDTH: u16 = 20;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for the row flashed after a progress edit
pub fn row_flash_style() -> Style {
    Style::default()
        .bg(COLOR_ROW_FLASH_BG)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for status messages
pub fn status_style() -> Style {
    Style::default().fg(COLOR_STATUS)
}

pub fn error_style() -> Style {
    Style::default()
        .fg(COLOR_ERROR)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for danger/warning borders
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

/// Style for info borders
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

// =============================================================================
// Progress Color Helper
// =============================================================================

/// Green once a game is finished, yellow while it is in progress
pub fn progress_color(complete: bool) -> Color {
    if complete {
        COLOR_COMPLETE
    } else {
        COLOR_IN_PROGRESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_error_styles_are_distinct() {
        assert_eq!(status_style().fg, Some(COLOR_STATUS));
        assert_eq!(error_style().fg, Some(COLOR_ERROR));
        assert_ne!(status_style(), error_style());
    }

    #[test]
    fn test_progress_color() {
        assert_eq!(progress_color(true), COLOR_COMPLETE);
        assert_eq!(progress_color(false), COLOR_IN_PROGRESS);
    }
}
