use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{FormField, GameFormState};
use crate::ui::{theme, utils};

/// Width reserved for field labels
const LABEL_WIDTH: usize = 10;

/// Render the registration form, one line per field
pub fn render_game_form(f: &mut Frame, area: Rect, form: &GameFormState, platforms: &[String]) {
    let lines: Vec<Line> = FormField::ALL
        .iter()
        .flat_map(|field| [field_line(*field, form, platforms), Line::from("")])
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent_border_style())
            .title(" New Game "),
    );

    f.render_widget(paragraph, area);
}

fn field_line(field: FormField, form: &GameFormState, platforms: &[String]) -> Line<'static> {
    let focused = form.current_field == field;
    let value_style = if focused {
        theme::form_field_focused_style()
    } else {
        theme::form_field_style()
    };

    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, theme::title_style()),
        Span::styled(
            format!("{:width$}", field.label(), width = LABEL_WIDTH),
            theme::header_style(),
        ),
    ];

    match field {
        FormField::Name | FormField::Year | FormField::Genre => {
            let text = match field {
                FormField::Name => &form.name,
                FormField::Year => &form.year,
                _ => &form.genre,
            };
            let cursor = if focused { "_" } else { "" };
            spans.push(Span::styled(format!("{}{}", text, cursor), value_style));
        }
        FormField::Platform => {
            let platform = form.platform(platforms);
            let shown = if focused {
                format!("◀ {} ▶", platform)
            } else {
                platform.to_string()
            };
            spans.push(Span::styled(shown, value_style));
        }
        FormField::Progress => {
            let bar_style = if focused {
                value_style
            } else {
                Style::default()
            };
            for span in utils::progress_spans(form.progress, theme::PROGRESS_BAR_WIDTH) {
                spans.push(span.patch_style(bar_style));
            }
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_focused_field_is_marked() {
        let mut form = GameFormState::new();
        form.name = "Zelda".to_string();
        let platforms = vec!["PC".to_string(), "Switch".to_string()];

        let name = text(&field_line(FormField::Name, &form, &platforms));
        let year = text(&field_line(FormField::Year, &form, &platforms));

        assert!(name.starts_with("> "));
        assert!(name.ends_with("Zelda_"));
        assert!(year.starts_with("  "));
    }

    #[test]
    fn test_progress_line_shows_label() {
        let form = GameFormState::new();
        let line = text(&field_line(FormField::Progress, &form, &[]));
        assert!(line.ends_with("100%"));
    }
}
