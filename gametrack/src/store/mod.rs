//! Game list persistence.
//!
//! The store owns the only writable copy of the list. Every mutation is
//! written through to the storage slot before it returns.

mod record;
mod storage;

pub use record::{GameRecord, MAX_PROGRESS};
pub use storage::{FileStorage, MemoryStorage, Storage};

use uuid::Uuid;

use crate::error::StoreError;

pub struct GameStore<S: Storage> {
    storage: S,
    key: String,
    records: Vec<GameRecord>,
}

impl<S: Storage> GameStore<S> {
    /// Load the list stored under `key`.
    ///
    /// A missing, unreadable or malformed slot yields an empty list; the
    /// failure is only logged.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let records = match Self::read_records(&storage, &key) {
            Ok(Some(records)) => {
                tracing::info!("Loaded {} games from slot {}", records.len(), key);
                records
            }
            Ok(None) => {
                tracing::info!("Slot {} is empty, starting with no games", key);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to load games from slot {}: {}", key, e);
                Vec::new()
            }
        };

        Self {
            storage,
            key,
            records,
        }
    }

    fn read_records(storage: &S, key: &str) -> Result<Option<Vec<GameRecord>>, StoreError> {
        let Some(data) = storage.read(key)? else {
            return Ok(None);
        };

        // Records are decoded one by one so a single bad entry cannot
        // empty the list (and the next save erase it from disk)
        let entries: Vec<serde_json::Value> = serde_json::from_str(&data)?;
        let total = entries.len();
        let records: Vec<GameRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping unreadable game #{} in slot {}: {}", index, key, e);
                    None
                }
            })
            .collect();

        if records.len() < total {
            tracing::warn!("Loaded {} of {} stored games", records.len(), total);
        }

        Ok(Some(records))
    }

    /// Overwrite the slot with the full current list
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.records)?;
        self.storage.write(&self.key, &json)
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Current position of the record in the full list
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a record and persist
    pub fn add(&mut self, record: GameRecord) -> Result<(), StoreError> {
        tracing::debug!("Adding game {} ({})", record.name, record.id);
        self.records.push(record);
        self.save()
    }

    /// Set the progress of a record and persist.
    ///
    /// Returns `false` without writing if no record has this id.
    pub fn set_progress(&mut self, id: Uuid, progress: u8) -> Result<bool, StoreError> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };

        record.progress = progress.min(MAX_PROGRESS);
        self.save()?;
        Ok(true)
    }

    /// Remove a record and persist, shifting later records down by one
    pub fn remove(&mut self, id: Uuid) -> Result<Option<GameRecord>, StoreError> {
        let Some(position) = self.position_of(id) else {
            return Ok(None);
        };

        let removed = self.records.remove(position);
        self.save()?;
        Ok(Some(removed))
    }
}
