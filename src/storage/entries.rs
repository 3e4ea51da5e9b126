//! Entry repository for JSON storage
//!
//! Manages loading and saving entries to entries.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::SaverError;
use crate::models::{Entry, EntryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable entry file layout
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct EntryData {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Default for EntryData {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

struct EntryState {
    next_id: EntryId,
    entries: BTreeMap<EntryId, Entry>,
}

/// Repository for entry persistence
///
/// Entries are kept ordered by ID, which is also their creation order.
pub struct EntryRepository {
    path: PathBuf,
    state: RwLock<EntryState>,
}

impl EntryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(EntryState {
                next_id: EntryId::new(1),
                entries: BTreeMap::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EntryState>, SaverError> {
        self.state
            .read()
            .map_err(|e| SaverError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EntryState>, SaverError> {
        self.state
            .write()
            .map_err(|e| SaverError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load entries from disk
    pub fn load(&self) -> Result<(), SaverError> {
        let file_data: EntryData = read_json(&self.path)?;
        let mut state = self.write()?;

        state.entries = file_data
            .entries
            .into_iter()
            .map(|entry| (entry.id, entry))
            .collect();

        // Never hand out an ID that is already taken, even if the counter was edited
        let after_last = state
            .entries
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(EntryId::new(1));
        state.next_id = EntryId::new(file_data.next_id).max(after_last);

        Ok(())
    }

    /// Save entries to disk
    pub fn save(&self) -> Result<(), SaverError> {
        let state = self.read()?;
        let file_data = EntryData {
            next_id: state.next_id.get(),
            entries: state.entries.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Reserve the next unused ID
    pub fn allocate_id(&self) -> Result<EntryId, SaverError> {
        let mut state = self.write()?;
        let id = state.next_id;
        state.next_id = id.next();
        Ok(id)
    }

    pub fn get(&self, id: EntryId) -> Result<Option<Entry>, SaverError> {
        Ok(self.read()?.entries.get(&id).cloned())
    }

    /// All entries in creation order
    pub fn get_all(&self) -> Result<Vec<Entry>, SaverError> {
        Ok(self.read()?.entries.values().cloned().collect())
    }

    /// Insert or replace an entry
    pub fn upsert(&self, entry: Entry) -> Result<(), SaverError> {
        let mut state = self.write()?;
        if entry.id >= state.next_id {
            state.next_id = entry.id.next();
        }
        state.entries.insert(entry.id, entry);
        Ok(())
    }

    /// Delete an entry, returning it if it existed
    pub fn delete(&self, id: EntryId) -> Result<Option<Entry>, SaverError> {
        Ok(self.write()?.entries.remove(&id))
    }

    pub fn count(&self) -> Result<usize, SaverError> {
        Ok(self.read()?.entries.len())
    }
}
