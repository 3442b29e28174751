use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::ProgressPrompt;
use crate::ui::theme;

/// Render the prompt asking for a new progress value
pub fn render_progress_prompt(f: &mut Frame, prompt: &ProgressPrompt) {
    let inner = super::popup::render_compact_popup_frame(
        f,
        f.area(),
        50,
        9,
        " Edit Progress ",
        theme::info_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Question
            Constraint::Length(3), // Input
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let question = Paragraph::new(format!("New progress (0-100) for \"{}\":", prompt.game_name))
        .alignment(Alignment::Center);
    f.render_widget(question, chunks[0]);

    let input = Paragraph::new(format!("{}_", prompt.input))
        .style(theme::status_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::accent_border_style()),
        );
    f.render_widget(input, chunks[1]);

    let instructions = Line::from(vec![
        Span::styled("[Enter]", theme::header_style()),
        Span::raw(" Save  "),
        Span::styled("[Esc]", theme::help_text_style()),
        Span::raw(" Cancel"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[2],
    );
}
