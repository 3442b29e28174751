//! Shared popup/modal base component.

use ratatui::prelude::Rect;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout},
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::layouts;

/// Render a popup frame sized relative to `parent_area` and return the
/// inner area for content.
///
/// # Arguments
/// * `size` - Tuple of (width_percent, height_percent)
/// * `title` - The popup title
/// * `border_style` - Style for the border (use theme::danger_border_style(), etc.)
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let area = layouts::centered_popup(size.0, size.1, parent_area);
    draw_frame(f, area, title, border_style)
}

/// Like `render_popup_frame`, but with a fixed height in lines.
///
/// Prompts and confirmations hold a handful of lines; a percentage height
/// would squash them on short terminals.
pub fn render_compact_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    width_percent: u16,
    height: u16,
    title: &str,
    border_style: Style,
) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(parent_area.height))])
        .flex(Flex::Center)
        .areas(parent_area);
    let [area] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);

    draw_frame(f, area, title, border_style)
}

fn draw_frame(f: &mut Frame, area: Rect, title: &str, border_style: Style) -> Rect {
    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
