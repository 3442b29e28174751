use crate::actions::{Confirmation, PromptResponse};
use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::store::GameRecord;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(
    event: KeyEvent,
    state: &AppState,
    records: &[GameRecord],
) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: an alert swallows the next key
    if state.alert.is_some() {
        return Some(AppCommand::DismissAlert);
    }

    // Priority 1: Ctrl+C / Ctrl+Q always quit
    if event.modifiers.ctrl && matches!(key, Key::Char('c') | Key::Char('q')) {
        return Some(AppCommand::Quit);
    }

    // Priority 2: popups and text modes of the games dialog
    if let Some(dialog) = &state.dialog {
        match dialog.input_mode {
            InputMode::RemoveConfirmation => return handle_remove_confirmation_keys(key),
            InputMode::ProgressPrompt => return handle_progress_prompt_keys(key, dialog),
            InputMode::Filter => {
                return match key {
                    Key::Enter => Some(AppCommand::ExitFilterMode),
                    Key::Backspace => Some(AppCommand::DeleteFilterChar),
                    Key::Esc => Some(AppCommand::ClearFilter),
                    Key::Char(c) if !c.is_control() => Some(AppCommand::AppendFilterChar(c)),
                    _ => None,
                };
            }
            InputMode::Normal => {}
        }
    }

    // Priority 3: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::F(1) | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') if state.dialog.is_some() => Some(AppCommand::Quit),
            _ => None,
        };
    }

    match &state.dialog {
        Some(dialog) => handle_dialog_keys(event, dialog, records),
        None => handle_form_keys(event, &state.form),
    }
}

/// Keys of the games dialog in normal mode
fn handle_dialog_keys(
    event: KeyEvent,
    dialog: &GamesDialogState,
    records: &[GameRecord],
) -> Option<AppCommand> {
    // Dialog bindings are bare keys; Ctrl+C/Ctrl+Q were handled above
    if event.modifiers.ctrl || event.modifiers.alt {
        return None;
    }

    match event.key {
        Key::Char('?') | Key::F(1) => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),

        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('g') => Some(AppCommand::NavigateToTop),
        Key::Char('G') => Some(AppCommand::NavigateToBottom),

        Key::Char('/') => Some(AppCommand::EnterFilterMode),
        Key::Char('p') => Some(AppCommand::CyclePlatformFilter { forward: true }),
        Key::Char('P') => Some(AppCommand::CyclePlatformFilter { forward: false }),

        Key::Char('e') | Key::Enter => dialog
            .selected_game(records)
            .map(|game| AppCommand::InitiateProgressEdit { game_id: game.id }),
        Key::Char('d') | Key::Backspace | Key::Delete => dialog
            .selected_game(records)
            .map(|game| AppCommand::InitiateRemove { game_id: game.id }),

        // Esc peels off the filter first, then closes the dialog
        Key::Esc if dialog.filter.is_active() => Some(AppCommand::ClearFilter),
        Key::Esc => Some(AppCommand::CloseGamesDialog),

        _ => None,
    }
}

/// Keys of the registration form
fn handle_form_keys(event: KeyEvent, form: &GameFormState) -> Option<AppCommand> {
    let key = event.key;

    if event.modifiers.ctrl {
        return match key {
            Key::Char('o') => Some(AppCommand::OpenGamesDialog),
            Key::Char('l') => Some(AppCommand::ClearFormField),
            _ => None,
        };
    }

    match (form.current_field, key) {
        (_, Key::F(1)) => Some(AppCommand::ToggleHelp),
        (_, Key::F(2)) => Some(AppCommand::OpenGamesDialog),
        (_, Key::Enter) => Some(AppCommand::SubmitForm),

        (_, Key::Tab | Key::Down) => Some(AppCommand::NavigateFormField { forward: true }),
        (_, Key::BackTab | Key::Up) => Some(AppCommand::NavigateFormField { forward: false }),

        (FormField::Platform, Key::Left) => Some(AppCommand::CycleFormPlatform { forward: false }),
        (FormField::Platform, Key::Right | Key::Char(' ')) => {
            Some(AppCommand::CycleFormPlatform { forward: true })
        }

        (FormField::Progress, Key::Left) => Some(AppCommand::AdjustFormProgress(-PROGRESS_STEP)),
        (FormField::Progress, Key::Right) => Some(AppCommand::AdjustFormProgress(PROGRESS_STEP)),
        (FormField::Progress, Key::Char('-')) => Some(AppCommand::AdjustFormProgress(-1)),
        (FormField::Progress, Key::Char('+' | '=')) => Some(AppCommand::AdjustFormProgress(1)),

        (FormField::Name | FormField::Year | FormField::Genre, Key::Backspace) => {
            Some(AppCommand::DeleteFormFieldChar)
        }
        (FormField::Name | FormField::Year | FormField::Genre, Key::Char(c))
            if !c.is_control() =>
        {
            Some(AppCommand::AppendFormFieldChar(c))
        }

        _ => None,
    }
}

/// Keys while the progress prompt is open
fn handle_progress_prompt_keys(key: Key, dialog: &GamesDialogState) -> Option<AppCommand> {
    match key {
        Key::Enter => dialog.progress_prompt.as_ref().map(|prompt| {
            AppCommand::AnswerProgressPrompt(PromptResponse::Value(prompt.input.clone()))
        }),
        Key::Esc => Some(AppCommand::AnswerProgressPrompt(PromptResponse::Cancelled)),
        Key::Backspace => Some(AppCommand::DeletePromptChar),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendPromptChar(c)),
        _ => None,
    }
}

/// Keys while the removal confirmation is open
fn handle_remove_confirmation_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('y') | Key::Char('Y') => Some(AppCommand::AnswerRemoval(Confirmation::Confirmed)),

        // Any other key declines
        _ => Some(AppCommand::AnswerRemoval(Confirmation::Declined)),
    }
}
