use ratatui::{backend::TestBackend, Terminal};

use crate::app_core::AppCore;
use crate::input::{Key, KeyEvent};
use crate::settings::Settings;
use crate::state::{AppState, GamesDialogState};
use crate::store::{GameRecord, GameStore, MemoryStorage};

pub struct TestApp {
    core: AppCore<MemoryStorage>,
    settings: Settings,
}

impl TestApp {
    /// Create a test app with an empty in-memory slot
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Create a test app whose slot already holds `games`
    pub fn with_games(games: &[GameRecord]) -> Self {
        let settings = Settings::default();
        let json = serde_json::to_string(games).expect("records serialize");
        Self::with_storage(MemoryStorage::with_slot(&settings.storage_key, &json))
    }

    pub fn with_storage(storage: MemoryStorage) -> Self {
        let settings = Settings::default();
        Self {
            core: AppCore::new(storage, &settings),
            settings,
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key with Ctrl held
    pub fn send_ctrl(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::with_ctrl(key));
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type each character of `text`
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn dialog(&self) -> &GamesDialogState {
        self.state()
            .dialog
            .as_ref()
            .expect("games dialog should be open")
    }

    pub fn store(&self) -> &GameStore<MemoryStorage> {
        self.core.store()
    }

    pub fn records(&self) -> &[GameRecord] {
        self.core.store().records()
    }

    pub fn storage(&self) -> &MemoryStorage {
        self.core.store().storage()
    }

    /// Records as they would be read back from the slot
    pub fn reload(&self) -> Vec<GameRecord> {
        GameStore::load(self.storage().clone(), self.settings.storage_key.clone())
            .records()
            .to_vec()
    }

    pub fn tick(&mut self, now: std::time::Instant) {
        self.core.tick(now);
    }

    /// Draw one frame into an in-memory terminal and return its text
    pub fn render(&self, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|f| crate::ui::render_app(f, self.state(), self.records()))
            .expect("test backend never fails");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
