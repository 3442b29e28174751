use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Highest value a progress percentage can take
pub const MAX_PROGRESS: u8 = 100;

/// A single tracked game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    // Older lists were stored without ids
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "text_label")]
    pub name: String,
    #[serde(default, deserialize_with = "text_label")]
    pub year: String,
    #[serde(default, deserialize_with = "text_label")]
    pub platform: String,
    #[serde(default, deserialize_with = "text_label")]
    pub genre: String,
    // Missing in some hand-edited lists
    #[serde(default, deserialize_with = "lenient_progress")]
    pub progress: u8,
}

impl GameRecord {
    pub fn new(
        name: impl Into<String>,
        year: impl Into<String>,
        platform: impl Into<String>,
        genre: impl Into<String>,
        progress: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            year: year.into(),
            platform: platform.into(),
            genre: genre.into(),
            progress,
        }
    }
}

/// Accept strings, numbers and null for free-text labels
fn text_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a text label, got {}",
            other
        ))),
    }
}

/// Accept a number or a numeric string, truncated and clamped into 0..=100.
///
/// Anything else (null, text, objects) counts as 0.
fn lenient_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|raw| raw.is_finite());

    let Some(raw) = parsed else {
        tracing::warn!("Stored progress {} is not a number, using 0", value);
        return Ok(0);
    };

    let clamped = raw.trunc().clamp(0.0, f64::from(MAX_PROGRESS));
    if clamped != raw {
        tracing::warn!("Stored progress {} adjusted to {}", raw, clamped);
    }

    Ok(clamped as u8)
}
