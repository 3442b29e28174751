use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::{AppState, InputMode};
use crate::ui::{layouts, theme};

pub fn render_help_popup(f: &mut Frame, state: &AppState) {
    let help_items = get_help_items(state);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match &state.dialog {
        None => {
            items.push(("Tab/↓", "Next field"));
            items.push(("Shift+Tab/↑", "Previous field"));
            items.push(("←/→", "Cycle platform, or change progress by 5"));
            items.push(("-/+", "Change progress by 1"));
            items.push(("Ctrl+L", "Clear the focused field"));
            items.push(("Enter", "Register the game"));
            items.push(("Ctrl+O/F2", "Open the games list"));
        }
        Some(dialog) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("g / G", "Jump to top / bottom"));
            items.push(("e/Enter", "Edit progress of selected game"));
            items.push(("d/Backspace", "Remove selected game"));
            items.push(("/", "Filter by name"));
            if dialog.input_mode == InputMode::Filter {
                items.push(("Type", "Match names containing the text"));
                items.push(("Enter", "Exit filter mode (keep filter active)"));
                items.push(("Esc", "Clear filter and exit filter mode"));
                items.push(("Backspace", "Delete last character"));
            }
            items.push(("p / P", "Cycle platform filter"));
            items.push(("Esc", "Clear filters, then close the list"));
            items.push(("q", "Quit application"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("?/F1", "Toggle this help"));
    items.push(("Ctrl+C/Ctrl+Q", "Quit application"));

    items
}
