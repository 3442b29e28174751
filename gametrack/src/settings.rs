use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::SettingsError;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Directory holding the storage slots
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the slot holding the game list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Options offered by the platform selector (form and filter)
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    /// How long an edited row stays highlighted
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gametrack")
}

fn default_storage_key() -> String {
    "gamesList".to_string()
}

fn default_platforms() -> Vec<String> {
    ["PC", "PlayStation", "Xbox", "Switch", "Mobile", "Other"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_highlight_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            platforms: default_platforms(),
            highlight_ms: default_highlight_ms(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var("GAMETRACK_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings: Settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(
                Environment::with_prefix("GAMETRACK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    // GAMETRACK_PLATFORMS=PC,Switch
                    .list_separator(",")
                    .with_list_parse_key("platforms"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.storage_key.trim().is_empty() {
            return Err(SettingsError::Invalid("storage_key is required".to_string()));
        }
        if self.storage_key.contains(['/', '\\']) {
            return Err(SettingsError::Invalid(
                "storage_key must not contain path separators".to_string(),
            ));
        }
        if self.platforms.iter().all(|p| p.trim().is_empty()) {
            return Err(SettingsError::Invalid(
                "platforms must list at least one option".to_string(),
            ));
        }
        Ok(())
    }
}
