pub mod actions;
mod app;
pub mod app_core;
pub mod commands;
pub mod error;
pub mod events;
pub mod filter;
pub mod input;
pub mod logging;
pub mod settings;
pub mod state;
pub mod store;
pub mod ui;

pub use app::App;
pub use settings::Settings;

// Always expose testing module (integration tests need it)
pub mod testing;
