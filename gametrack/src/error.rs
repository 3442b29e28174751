use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to persist slot {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: tempfile::PersistError,
    },
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Invalid value. Enter a number between 0 and 100.")]
    InvalidProgress(String),

    #[error("Game {0} not found")]
    NotFound(Uuid),

    #[error("Could not save games: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
