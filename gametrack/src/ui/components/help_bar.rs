//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::StatusMessage;
use crate::ui::theme;

/// Render the help bar, or the pending status message in its place.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str, status: Option<&StatusMessage>) {
    let (text, style) = match status {
        Some(status) if status.is_error => (status.text.as_str(), theme::error_style()),
        Some(status) => (status.text.as_str(), theme::status_style()),
        None => (text, theme::help_text_style()),
    };

    let help = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_FORM: &str =
    "Tab: next field | Enter: register | Ctrl+O: games | F1: help | Ctrl+Q: quit";

pub const HELP_TEXT_DIALOG: &str =
    "e: edit progress | d: remove | /: filter | p: platform | Esc: close | ?: help";
