pub mod components;
pub mod games_table;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::{AppState, InputMode};
use crate::store::GameRecord;
use ratatui::Frame;
use screens::*;

/// Pure render function: the form, then the dialog and popups stacked on top.
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, records: &[GameRecord]) {
    register_screen::render(f, state, records.len());

    if let Some(dialog) = &state.dialog {
        games_dialog::render(f, state, dialog, records);

        match dialog.input_mode {
            InputMode::ProgressPrompt => {
                if let Some(prompt) = &dialog.progress_prompt {
                    components::progress_prompt::render_progress_prompt(f, prompt);
                }
            }
            InputMode::RemoveConfirmation => {
                if let Some(removal) = &dialog.removal_prompt {
                    components::remove_confirmation::render_remove_confirmation(
                        f,
                        &removal.game_name,
                    );
                }
            }
            InputMode::Normal | InputMode::Filter => {}
        }
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state);
    }

    if let Some(message) = &state.alert {
        components::alert::render_alert(f, message);
    }
}
