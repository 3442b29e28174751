use std::time::Instant;

use crate::actions::{self, EditOutcome, RemoveOutcome};
use crate::error::ActionError;
use crate::events::AppCommand;
use crate::state::*;
use crate::store::{GameStore, Storage};

/// Execute a command against the UI state and the game store
pub fn execute_command<S: Storage>(
    command: AppCommand,
    state: &mut AppState,
    store: &mut GameStore<S>,
) {
    match command {
        AppCommand::NavigateFormField { forward } => {
            let field = state.form.current_field;
            state.form.current_field = if forward { field.next() } else { field.prev() };
        }

        AppCommand::AppendFormFieldChar(c) => {
            if let Some(field) = state.form.text_field_mut() {
                field.push(c);
            }
        }

        AppCommand::DeleteFormFieldChar => {
            if let Some(field) = state.form.text_field_mut() {
                field.pop();
            }
        }

        AppCommand::ClearFormField => match state.form.current_field {
            FormField::Platform => state.form.platform_index = 0,
            FormField::Progress => state.form.progress = DEFAULT_PROGRESS,
            _ => {
                if let Some(field) = state.form.text_field_mut() {
                    field.clear();
                }
            }
        },

        AppCommand::CycleFormPlatform { forward } => {
            let num_options = state.platforms.len();
            state.form.cycle_platform(num_options, forward);
        }

        AppCommand::AdjustFormProgress(delta) => {
            state.form.adjust_progress(delta);
        }

        AppCommand::SubmitForm => {
            let record = validators::build_record(&state.form, &state.platforms);
            let name = record.name.clone();

            match actions::submit(store, record) {
                Ok(_) => state.set_status(format!("Registered {}", name), false),
                Err(e) => {
                    tracing::error!("Failed to save new game {:?}: {}", name, e);
                    state.set_status(e.to_string(), true);
                }
            }

            // Fresh form, unfiltered dialog with the new game selected
            state.form.reset();
            let dialog = GamesDialogState::new();
            dialog
                .table_state
                .borrow_mut()
                .select(store.len().checked_sub(1));
            state.dialog = Some(dialog);
        }

        AppCommand::OpenGamesDialog => {
            // Never reopen on stale queries
            tracing::debug!("Opening games dialog ({} games)", store.len());
            state.dialog = Some(GamesDialogState::new());
        }

        AppCommand::CloseGamesDialog => {
            state.dialog = None;
        }

        AppCommand::SelectNext => {
            if let Some(dialog) = &state.dialog {
                dialog.select_next(dialog.filter.apply(store.records()).len());
            }
        }

        AppCommand::SelectPrevious => {
            if let Some(dialog) = &state.dialog {
                dialog.select_prev(dialog.filter.apply(store.records()).len());
            }
        }

        AppCommand::NavigateToTop => {
            if let Some(dialog) = &state.dialog {
                let num_items = dialog.filter.apply(store.records()).len();
                if num_items > 0 {
                    dialog.table_state.borrow_mut().select_first();
                }
            }
        }

        AppCommand::NavigateToBottom => {
            if let Some(dialog) = &state.dialog {
                let num_items = dialog.filter.apply(store.records()).len();
                if num_items > 0 {
                    dialog.table_state.borrow_mut().select(Some(num_items - 1));
                }
            }
        }

        AppCommand::EnterFilterMode => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.input_mode = InputMode::Filter;
            }
        }

        AppCommand::ExitFilterMode => {
            if let Some(dialog) = state.dialog.as_mut() {
                // Keep the query - filter remains active
                dialog.input_mode = InputMode::Normal;
            }
        }

        AppCommand::AppendFilterChar(c) => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.filter.name.push(c);
                dialog.reset_selection();
            }
        }

        AppCommand::DeleteFilterChar => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.filter.name.pop();
                dialog.reset_selection();
            }
        }

        AppCommand::ClearFilter => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.filter.clear();
                dialog.input_mode = InputMode::Normal;
                dialog.reset_selection();
            }
        }

        AppCommand::CyclePlatformFilter { forward } => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.filter.cycle_platform(&state.platforms, forward);
                dialog.reset_selection();
            }
        }

        AppCommand::InitiateProgressEdit { game_id } => {
            let Some(game) = store.get(game_id) else {
                tracing::warn!("Edit requested for unknown game {}", game_id);
                return;
            };
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.input_mode = InputMode::ProgressPrompt;
                dialog.progress_prompt = Some(ProgressPrompt {
                    game_id,
                    game_name: game.name.clone(),
                    input: game.progress.to_string(),
                });
            }
        }

        AppCommand::AppendPromptChar(c) => {
            if let Some(prompt) = state
                .dialog
                .as_mut()
                .and_then(|d| d.progress_prompt.as_mut())
            {
                prompt.input.push(c);
            }
        }

        AppCommand::DeletePromptChar => {
            if let Some(prompt) = state
                .dialog
                .as_mut()
                .and_then(|d| d.progress_prompt.as_mut())
            {
                prompt.input.pop();
            }
        }

        AppCommand::AnswerProgressPrompt(response) => {
            let Some(dialog) = state.dialog.as_mut() else {
                return;
            };
            dialog.input_mode = InputMode::Normal;
            let Some(prompt) = dialog.progress_prompt.take() else {
                return;
            };

            match actions::edit_progress(store, prompt.game_id, response) {
                Ok(EditOutcome::Updated { progress }) => {
                    dialog.highlight = Some(RowHighlight {
                        game_id: prompt.game_id,
                        until: Instant::now() + state.highlight_duration,
                    });
                    state.set_status(
                        format!("{} is now at {}%", prompt.game_name, progress),
                        false,
                    );
                }
                Ok(EditOutcome::Cancelled) => {}
                Err(e @ ActionError::InvalidProgress(_)) => {
                    tracing::debug!("Rejected progress for {}: {}", prompt.game_name, e);
                    state.alert = Some(e.to_string());
                }
                Err(e) => {
                    tracing::error!("Failed to update {:?}: {}", prompt.game_name, e);
                    state.set_status(e.to_string(), true);
                }
            }
        }

        AppCommand::InitiateRemove { game_id } => {
            let Some(game) = store.get(game_id) else {
                tracing::warn!("Removal requested for unknown game {}", game_id);
                return;
            };
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.input_mode = InputMode::RemoveConfirmation;
                dialog.removal_prompt = Some(RemovalPrompt {
                    game_id,
                    game_name: game.name.clone(),
                });
            }
        }

        AppCommand::AnswerRemoval(confirmation) => {
            let Some(dialog) = state.dialog.as_mut() else {
                return;
            };
            dialog.input_mode = InputMode::Normal;
            let Some(prompt) = dialog.removal_prompt.take() else {
                return;
            };

            match actions::remove_game(store, prompt.game_id, confirmation) {
                Ok(RemoveOutcome::Removed(removed)) => {
                    dialog.clamp_selection(dialog.filter.apply(store.records()).len());
                    state.set_status(format!("Removed {}", removed.name), false);
                }
                Ok(RemoveOutcome::Declined) => {}
                Err(e) => {
                    tracing::error!("Failed to remove {:?}: {}", prompt.game_name, e);
                    dialog.clamp_selection(dialog.filter.apply(store.records()).len());
                    state.set_status(e.to_string(), true);
                }
            }
        }

        AppCommand::DismissAlert => {
            state.alert = None;
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
        }

        AppCommand::Quit => {
            state.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{GameRecord, MemoryStorage};
    use std::time::Duration;

    const KEY: &str = "gamesList";

    fn setup(records: &[GameRecord]) -> (AppState, GameStore<MemoryStorage>) {
        let json = serde_json::to_string(records).unwrap();
        let store = GameStore::load(MemoryStorage::with_slot(KEY, &json), KEY);
        let state = AppState::new(
            vec!["PC".to_string(), "Switch".to_string()],
            Duration::from_millis(1000),
        );
        (state, store)
    }

    #[test]
    fn test_submit_resets_form_and_opens_unfiltered_dialog() {
        let (mut state, mut store) = setup(&[]);
        state.form.name = "Zelda".to_string();
        state.form.platform_index = 1;
        state.form.progress = 40;

        execute_command(AppCommand::SubmitForm, &mut state, &mut store);

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].platform, "Switch");
        assert_eq!(store.records()[0].progress, 40);
        assert_eq!(state.form, GameFormState::default());

        let dialog = state.dialog.as_ref().expect("dialog should open");
        assert!(!dialog.filter.is_active());
        assert_eq!(dialog.table_state.borrow().selected(), Some(0));
    }

    #[test]
    fn test_open_dialog_discards_previous_filter() {
        let (mut state, mut store) = setup(&[]);
        execute_command(AppCommand::OpenGamesDialog, &mut state, &mut store);
        execute_command(AppCommand::AppendFilterChar('z'), &mut state, &mut store);
        execute_command(AppCommand::CloseGamesDialog, &mut state, &mut store);
        execute_command(AppCommand::OpenGamesDialog, &mut state, &mut store);

        assert!(!state.dialog.as_ref().unwrap().filter.is_active());
    }

    #[test]
    fn test_edit_flow_highlights_row() {
        let game = GameRecord::new("Hades", "2020", "PC", "Roguelike", 35);
        let (mut state, mut store) = setup(std::slice::from_ref(&game));
        state.dialog = Some(GamesDialogState::new());

        execute_command(
            AppCommand::InitiateProgressEdit { game_id: game.id },
            &mut state,
            &mut store,
        );
        let prompt = state.dialog.as_ref().unwrap().progress_prompt.clone().unwrap();
        assert_eq!(prompt.input, "35");

        execute_command(AppCommand::DeletePromptChar, &mut state, &mut store);
        execute_command(AppCommand::AppendPromptChar('9'), &mut state, &mut store);
        execute_command(
            AppCommand::AnswerProgressPrompt(actions::PromptResponse::Value("39".into())),
            &mut state,
            &mut store,
        );

        let dialog = state.dialog.as_ref().unwrap();
        assert_eq!(store.records()[0].progress, 39);
        assert_eq!(dialog.input_mode, InputMode::Normal);
        assert!(dialog.is_highlighted(game.id));
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_invalid_edit_raises_alert() {
        let game = GameRecord::new("Hades", "2020", "PC", "Roguelike", 35);
        let (mut state, mut store) = setup(std::slice::from_ref(&game));
        state.dialog = Some(GamesDialogState::new());

        execute_command(
            AppCommand::InitiateProgressEdit { game_id: game.id },
            &mut state,
            &mut store,
        );
        execute_command(
            AppCommand::AnswerProgressPrompt(actions::PromptResponse::Value("150".into())),
            &mut state,
            &mut store,
        );

        assert_eq!(store.records()[0].progress, 35);
        assert!(state.alert.is_some());
        assert!(state.dialog.as_ref().unwrap().highlight.is_none());
    }

    #[test]
    fn test_remove_clamps_selection() {
        let games = vec![
            GameRecord::new("A", "", "PC", "", 1),
            GameRecord::new("B", "", "PC", "", 2),
        ];
        let (mut state, mut store) = setup(&games);
        let dialog = GamesDialogState::new();
        dialog.table_state.borrow_mut().select(Some(1));
        state.dialog = Some(dialog);

        execute_command(
            AppCommand::InitiateRemove { game_id: games[1].id },
            &mut state,
            &mut store,
        );
        assert_eq!(
            state.dialog.as_ref().unwrap().input_mode,
            InputMode::RemoveConfirmation
        );

        execute_command(
            AppCommand::AnswerRemoval(actions::Confirmation::Confirmed),
            &mut state,
            &mut store,
        );

        assert_eq!(store.len(), 1);
        assert_eq!(
            state.dialog.as_ref().unwrap().table_state.borrow().selected(),
            Some(0)
        );
    }

    #[test]
    fn test_failed_save_sets_error_status() {
        let mut store = GameStore::load(MemoryStorage::new().failing_writes(), KEY);
        let mut state = AppState::new(vec!["PC".to_string()], Duration::from_millis(1000));
        state.form.name = "Celeste".to_string();

        execute_command(AppCommand::SubmitForm, &mut state, &mut store);

        assert_eq!(store.len(), 1);
        assert!(state.status.as_ref().is_some_and(|s| s.is_error));
    }
}
