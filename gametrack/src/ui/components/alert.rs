use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Render a blocking message; any key dismisses it
pub fn render_alert(f: &mut Frame, message: &str) {
    let inner = super::popup::render_compact_popup_frame(
        f,
        f.area(),
        50,
        7,
        " Alert ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = Paragraph::new(message)
        .style(theme::error_style().remove_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, chunks[0]);

    let hint = Paragraph::new("Press any key")
        .style(theme::help_text_style())
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);
}
