//! Filter bar of the games dialog.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::filter::FilterQuery;
use crate::ui::theme;

/// Render the name query and the platform query side by side.
///
/// While `editing` the name query gets a cursor and the accent border.
pub fn render_filter_input(f: &mut Frame, area: Rect, filter: &FilterQuery, editing: bool) {
    let name_style = if editing {
        theme::status_style()
    } else {
        theme::form_field_style()
    };

    let mut name = filter.name.clone();
    if editing {
        name.push('_');
    }

    let line = Line::from(vec![
        Span::styled("Name: ", theme::header_style()),
        Span::styled(name, name_style),
        Span::raw("   "),
        Span::styled("Platform: ", theme::header_style()),
        Span::styled(
            filter.platform.as_deref().unwrap_or("All").to_string(),
            theme::form_field_style(),
        ),
    ]);

    let (title, border_style) = if editing {
        (
            "Filter (Enter: apply, Esc: clear)",
            theme::accent_border_style(),
        )
    } else {
        ("Filter (/: name, p/P: platform)", Style::default())
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(input, area);
}
