use uuid::Uuid;

use crate::actions::{Confirmation, PromptResponse};

/// Commands to execute (user actions → state and store changes)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Registration form
    NavigateFormField { forward: bool },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,
    ClearFormField,
    CycleFormPlatform { forward: bool },
    AdjustFormProgress(i16),
    SubmitForm,

    // Games dialog
    OpenGamesDialog,
    CloseGamesDialog,
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Filter mode
    EnterFilterMode,
    ExitFilterMode,
    AppendFilterChar(char),
    DeleteFilterChar,
    ClearFilter,
    CyclePlatformFilter { forward: bool },

    // Progress editing
    InitiateProgressEdit { game_id: Uuid },
    AppendPromptChar(char),
    DeletePromptChar,
    AnswerProgressPrompt(PromptResponse),

    // Removal
    InitiateRemove { game_id: Uuid },
    AnswerRemoval(Confirmation),

    // System
    DismissAlert,
    ToggleHelp,
    Quit,
}
