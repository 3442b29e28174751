use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{AppState, GamesDialogState, InputMode};
use crate::store::GameRecord;
use crate::ui::{
    components::{empty_state, filter_input, help_bar, popup},
    games_table::{self, GameRow, TableView},
    layouts, theme,
};

/// Games dialog: filter bar, table of visible games, help bar.
///
/// Rebuilt from scratch every frame.
pub fn render(f: &mut Frame, state: &AppState, dialog: &GamesDialogState, records: &[GameRecord]) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::DIALOG,
        " My Games ",
        theme::accent_border_style(),
    );
    let (filter_area, content_area, help_area) = layouts::dialog_layout(inner);

    filter_input::render_filter_input(
        f,
        filter_area,
        &dialog.filter,
        dialog.input_mode == InputMode::Filter,
    );

    let visible = dialog.filter.apply(records);
    match games_table::build(&visible, records) {
        TableView::Empty(reason) => {
            let hint = match reason {
                games_table::EmptyReason::NoGames => Some("Close this list and fill in the form"),
                games_table::EmptyReason::NoMatches => Some("Esc clears the filters"),
            };
            empty_state::render_empty_state(f, content_area, "Games", reason.message(), hint);
        }
        TableView::Rows(rows) => render_table(f, content_area, dialog, &rows, records.len()),
    }

    help_bar::render_help_bar(
        f,
        help_area,
        help_bar::HELP_TEXT_DIALOG,
        state.status.as_ref(),
    );
}

fn render_table(
    f: &mut Frame,
    area: Rect,
    dialog: &GamesDialogState,
    rows: &[GameRow],
    total: usize,
) {
    let header = Row::new(vec![
        Cell::from(Text::from("#").right_aligned()),
        Cell::from("Name"),
        Cell::from("Year"),
        Cell::from("Platform"),
        Cell::from("Genre"),
        Cell::from("Progress"),
    ])
    .style(theme::header_style())
    .underlined();

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let progress = Line::from(row.progress_spans(theme::PROGRESS_BAR_WIDTH));

            let table_row = Row::new(vec![
                Cell::from(Text::from(row.rank.to_string()).right_aligned()),
                Cell::from(row.name.clone()),
                Cell::from(row.year.clone()),
                Cell::from(row.platform.clone()),
                Cell::from(row.genre.clone()),
                Cell::from(progress),
            ]);

            if dialog.is_highlighted(row.id) {
                table_row.style(theme::row_flash_style())
            } else {
                table_row
            }
        })
        .collect();

    let title = if dialog.filter.is_active() {
        format!("Games ({} of {} shown)", rows.len(), total)
    } else {
        format!("Games ({})", total)
    };

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Length(theme::PROGRESS_BAR_WIDTH + 5),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut dialog.table_state.borrow_mut());
}
