use ratatui::{prelude::*, widgets::Paragraph};

use crate::state::AppState;
use crate::ui::{
    components::{game_form, help_bar},
    layouts, theme,
};

/// Main view: title, registration form, help bar
pub fn render(f: &mut Frame, state: &AppState, total_games: usize) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Game Tracker ({} registered)", total_games);
    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);

    game_form::render_game_form(f, content_area, &state.form, &state.platforms);

    // The dialog carries its own help bar and status line
    let status = if state.dialog.is_none() {
        state.status.as_ref()
    } else {
        None
    };
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_FORM, status);
}
