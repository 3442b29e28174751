use crate::error::ActionError;
use crate::state::GameFormState;
use crate::store::{GameRecord, MAX_PROGRESS};

/// Parse the answer of the progress prompt.
///
/// Only whole numbers in 0..=100 are accepted; surrounding whitespace is
/// ignored.
pub fn validate_progress(input: &str) -> Result<u8, ActionError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ActionError::InvalidProgress(input.to_string()))?;

    if !(0..=i64::from(MAX_PROGRESS)).contains(&value) {
        return Err(ActionError::InvalidProgress(input.to_string()));
    }

    Ok(value as u8)
}

/// Build a new record from the form.
///
/// Nothing is rejected here; the progress slider can only hold values in
/// range and the text fields are free-form.
pub fn build_record(form: &GameFormState, platforms: &[String]) -> GameRecord {
    GameRecord::new(
        form.name.trim(),
        form.year.trim(),
        form.platform(platforms),
        form.genre.trim(),
        form.progress.min(MAX_PROGRESS),
    )
}
