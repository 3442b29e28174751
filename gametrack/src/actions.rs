//! Store mutations triggered by user actions.
//!
//! Each handler runs to completion against an injected store. Answers from
//! the prompt and confirmation popups arrive as plain values, so handlers
//! can be exercised without a terminal.

use uuid::Uuid;

use crate::error::ActionError;
use crate::state::validators;
use crate::store::{GameRecord, GameStore, Storage};

/// Answer to the "new progress" prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Cancelled,
    Value(String),
}

/// Answer to the removal confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Cancelled,
    Updated { progress: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Declined,
    Removed(GameRecord),
}

/// Append a new record and persist it
pub fn submit<S: Storage>(store: &mut GameStore<S>, record: GameRecord) -> Result<Uuid, ActionError> {
    let id = record.id;
    tracing::info!("Registering game {:?} ({}%)", record.name, record.progress);
    store.add(record)?;
    Ok(id)
}

/// Apply the answer of the progress prompt to the record `id`
pub fn edit_progress<S: Storage>(
    store: &mut GameStore<S>,
    id: Uuid,
    response: PromptResponse,
) -> Result<EditOutcome, ActionError> {
    let input = match response {
        PromptResponse::Cancelled => return Ok(EditOutcome::Cancelled),
        PromptResponse::Value(input) => input,
    };

    if store.get(id).is_none() {
        return Err(ActionError::NotFound(id));
    }

    let progress = validators::validate_progress(&input)?;
    store.set_progress(id, progress)?;
    tracing::info!("Progress of {} set to {}%", id, progress);

    Ok(EditOutcome::Updated { progress })
}

/// Remove the record `id` once the user has confirmed
pub fn remove_game<S: Storage>(
    store: &mut GameStore<S>,
    id: Uuid,
    confirmation: Confirmation,
) -> Result<RemoveOutcome, ActionError> {
    if confirmation == Confirmation::Declined {
        return Ok(RemoveOutcome::Declined);
    }

    match store.remove(id)? {
        Some(removed) => {
            tracing::info!("Removed game {:?}", removed.name);
            Ok(RemoveOutcome::Removed(removed))
        }
        None => Err(ActionError::NotFound(id)),
    }
}
