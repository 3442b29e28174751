pub mod validators;

use ratatui::widgets::TableState;
use std::cell::RefCell;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::filter::FilterQuery;
use crate::store::{GameRecord, MAX_PROGRESS};

/// Progress preselected on a fresh form
pub const DEFAULT_PROGRESS: u8 = MAX_PROGRESS;

/// Step used by Left/Right on the progress slider
pub const PROGRESS_STEP: i16 = 5;

/// How long a status message stays in the help bar
pub const STATUS_DURATION: Duration = Duration::from_secs(4);

/// Input mode of the games dialog
#[derive(Default, Debug, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
    ProgressPrompt,
    RemoveConfirmation,
}

/// Fields of the registration form, in tab order
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Year,
    Platform,
    Genre,
    Progress,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Year,
        FormField::Platform,
        FormField::Genre,
        FormField::Progress,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Year,
            Self::Year => Self::Platform,
            Self::Platform => Self::Genre,
            Self::Genre => Self::Progress,
            Self::Progress => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Progress,
            Self::Year => Self::Name,
            Self::Platform => Self::Year,
            Self::Genre => Self::Platform,
            Self::Progress => Self::Genre,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Year => "Year",
            Self::Platform => "Platform",
            Self::Genre => "Genre",
            Self::Progress => "Progress",
        }
    }
}

/// State of the registration form
#[derive(Debug, Clone, PartialEq)]
pub struct GameFormState {
    pub current_field: FormField,
    pub name: String,
    pub year: String,
    pub platform_index: usize,
    pub genre: String,
    pub progress: u8,
}

impl Default for GameFormState {
    fn default() -> Self {
        Self {
            current_field: FormField::default(),
            name: String::new(),
            year: String::new(),
            platform_index: 0,
            genre: String::new(),
            progress: DEFAULT_PROGRESS,
        }
    }
}

impl GameFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The focused field's text buffer, if it is a free-text field
    pub fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.current_field {
            FormField::Name => Some(&mut self.name),
            FormField::Year => Some(&mut self.year),
            FormField::Genre => Some(&mut self.genre),
            FormField::Platform | FormField::Progress => None,
        }
    }

    pub fn platform<'a>(&self, options: &'a [String]) -> &'a str {
        options
            .get(self.platform_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn cycle_platform(&mut self, num_options: usize, forward: bool) {
        if num_options == 0 {
            return;
        }
        self.platform_index = if forward {
            (self.platform_index + 1) % num_options
        } else {
            (self.platform_index + num_options - 1) % num_options
        };
    }

    pub fn adjust_progress(&mut self, delta: i16) {
        let value = (i16::from(self.progress) + delta).clamp(0, i16::from(MAX_PROGRESS));
        self.progress = value as u8;
    }
}

/// Pending "new progress" prompt
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPrompt {
    pub game_id: Uuid,
    pub game_name: String,
    pub input: String,
}

/// Pending removal confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalPrompt {
    pub game_id: Uuid,
    pub game_name: String,
}

/// Row flashed after its progress changed
#[derive(Debug, Clone, PartialEq)]
pub struct RowHighlight {
    pub game_id: Uuid,
    pub until: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub until: Instant,
}

/// State of the games dialog while it is open
#[derive(Debug, Clone)]
pub struct GamesDialogState {
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
    pub filter: FilterQuery,
    pub progress_prompt: Option<ProgressPrompt>,
    pub removal_prompt: Option<RemovalPrompt>,
    pub highlight: Option<RowHighlight>,
}

impl Default for GamesDialogState {
    fn default() -> Self {
        Self {
            table_state: RefCell::new(TableState::default().with_selected(0)),
            input_mode: InputMode::default(),
            filter: FilterQuery::default(),
            progress_prompt: None,
            removal_prompt: None,
            highlight: None,
        }
    }
}

impl GamesDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record under the cursor, resolved through the active filter
    pub fn selected_game<'a>(&self, records: &'a [GameRecord]) -> Option<&'a GameRecord> {
        let selected = self.table_state.borrow().selected()?;
        self.filter.apply(records).get(selected)
    }

    pub fn reset_selection(&mut self) {
        self.table_state = RefCell::new(TableState::default().with_selected(0));
    }

    pub fn select_prev(&self, num_items: usize) {
        let mut table_state = self.table_state.borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(num_items - 1));
            } else {
                table_state.scroll_up_by(1);
            }
        }
    }

    pub fn select_next(&self, num_items: usize) {
        let mut table_state = self.table_state.borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) >= num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1);
            }
        }
    }

    /// Keep the cursor inside a table of `num_items` rows
    pub fn clamp_selection(&self, num_items: usize) {
        let mut table_state = self.table_state.borrow_mut();
        match table_state.selected() {
            _ if num_items == 0 => table_state.select(None),
            Some(selected) if selected >= num_items => table_state.select(Some(num_items - 1)),
            None => table_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn is_highlighted(&self, game_id: Uuid) -> bool {
        self.highlight
            .as_ref()
            .is_some_and(|h| h.game_id == game_id)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Options of the platform selectors
    pub platforms: Vec<String>,
    pub highlight_duration: Duration,

    pub form: GameFormState,
    pub dialog: Option<GamesDialogState>,

    /// Validation message shown until dismissed
    pub alert: Option<String>,
    pub status: Option<StatusMessage>,

    pub help_visible: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(platforms: Vec<String>, highlight_duration: Duration) -> Self {
        Self {
            platforms,
            highlight_duration,
            form: GameFormState::new(),
            dialog: None,
            alert: None,
            status: None,
            help_visible: false,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            until: Instant::now() + STATUS_DURATION,
        });
    }

    /// Drop highlights and status messages whose time is up
    pub fn expire(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.until <= now) {
            self.status = None;
        }
        if let Some(dialog) = self.dialog.as_mut() {
            if dialog.highlight.as_ref().is_some_and(|h| h.until <= now) {
                dialog.highlight = None;
            }
        }
    }
}
