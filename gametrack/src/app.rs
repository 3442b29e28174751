use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Instant;

use crate::app_core::AppCore;
use crate::input::KeyEvent;
use crate::logging::init_logging;
use crate::settings::Settings;
use crate::store::FileStorage;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let (log_path, _log_guard) = init_logging()?;

        tracing::info!("gametrack starting, logging to {}", log_path.display());

        let storage = FileStorage::new(&self.settings.data_dir).with_context(|| {
            format!(
                "Could not open data directory {}",
                self.settings.data_dir.display()
            )
        })?;
        tracing::info!(
            "Using slot {}",
            storage.slot_path(&self.settings.storage_key).display()
        );

        let mut core = AppCore::new(storage, &self.settings);
        let mut terminal = self.init()?;
        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        let result: Result<()> = loop {
            if let Err(e) = terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), core.store().records());
            }) {
                break Err(e.into());
            }

            tokio::select! {
                _ = interval.tick() => {
                    core.tick(Instant::now());
                }
                Some(event) = event_stream.next() => {
                    match event {
                        Ok(Event::Key(key)) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("Key press: {:?}", key);
                            core.handle_key(KeyEvent::from(key));
                        }
                        Ok(_) => {
                            // Resize and other events only need a redraw
                        }
                        Err(e) => break Err(e.into()),
                    }
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break Ok(());
            }
        };

        tracing::info!("Cleaning up application");
        self.exit(terminal)?;

        result
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
