use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Render the confirmation popup for removing `game_name`
pub fn render_remove_confirmation(f: &mut Frame, game_name: &str) {
    let inner = super::popup::render_compact_popup_frame(
        f,
        f.area(),
        60,
        8,
        " Confirm Removal ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Question
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let question = Paragraph::new(format!("Remove \"{}\" from your games?", game_name))
        .style(theme::status_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(question, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(
            "[Y]es ",
            Style::default()
                .fg(theme::COLOR_COMPLETE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled("any other key", Style::default().fg(theme::COLOR_HELP_TEXT)),
        Span::raw(" to keep it"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}
