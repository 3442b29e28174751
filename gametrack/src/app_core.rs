use std::time::Instant;

use crate::commands::{executor, handlers};
use crate::events::AppCommand;
use crate::input::KeyEvent;
use crate::settings::Settings;
use crate::state::AppState;
use crate::store::{GameStore, Storage};

/// Testable application core without terminal dependencies
///
/// Generic over the storage backend: the terminal app runs on
/// `FileStorage`, tests run on `MemoryStorage` and inspect its slots.
pub struct AppCore<S: Storage> {
    ui_state: AppState,
    store: GameStore<S>,
}

impl<S: Storage> AppCore<S> {
    /// Load the game list from `storage` and start on the registration form
    pub fn new(storage: S, settings: &Settings) -> Self {
        let store = GameStore::load(storage, settings.storage_key.clone());
        let ui_state = AppState::new(
            settings.platforms.clone(),
            std::time::Duration::from_millis(settings.highlight_ms),
        );

        Self { ui_state, store }
    }

    /// Handle keyboard input and execute the resulting command
    ///
    /// This is the main entry point for user input. It:
    /// 1. Translates the key press to an AppCommand for the current state
    /// 2. Executes the command against the state and the store
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state, self.store.records())
        {
            self.execute(command);
        }
    }

    /// Execute a command directly, bypassing key mapping
    pub fn execute(&mut self, command: AppCommand) {
        tracing::debug!("Executing command: {:?}", command);
        executor::execute_command(command, &mut self.ui_state, &mut self.store);
    }

    /// Expire time-limited UI elements (row highlight, status line)
    pub fn tick(&mut self, now: Instant) {
        self.ui_state.expire(now);
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn store(&self) -> &GameStore<S> {
        &self.store
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
