//! Savings goal repository for JSON storage
//!
//! Manages loading and saving goals to goals.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::SaverError;
use crate::models::{GoalId, SavingsGoal};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct GoalData {
    next_id: u64,
    goals: Vec<SavingsGoal>,
}

impl Default for GoalData {
    fn default() -> Self {
        Self {
            next_id: 1,
            goals: Vec::new(),
        }
    }
}

struct GoalState {
    next_id: GoalId,
    goals: BTreeMap<GoalId, SavingsGoal>,
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    path: PathBuf,
    state: RwLock<GoalState>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(GoalState {
                next_id: GoalId::new(1),
                goals: BTreeMap::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, GoalState>, SaverError> {
        self.state
            .read()
            .map_err(|e| SaverError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, GoalState>, SaverError> {
        self.state
            .write()
            .map_err(|e| SaverError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), SaverError> {
        let file_data: GoalData = read_json(&self.path)?;
        let mut state = self.write()?;

        state.goals = file_data
            .goals
            .into_iter()
            .map(|goal| (goal.id, goal))
            .collect();

        let after_last = state
            .goals
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(GoalId::new(1));
        state.next_id = GoalId::new(file_data.next_id).max(after_last);

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), SaverError> {
        let state = self.read()?;
        let file_data = GoalData {
            next_id: state.next_id.get(),
            goals: state.goals.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Reserve the next unused ID
    pub fn allocate_id(&self) -> Result<GoalId, SaverError> {
        let mut state = self.write()?;
        let id = state.next_id;
        state.next_id = id.next();
        Ok(id)
    }

    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, SaverError> {
        Ok(self.read()?.goals.get(&id).cloned())
    }

    /// Case-insensitive lookup by name
    pub fn get_by_name(&self, name: &str) -> Result<Option<SavingsGoal>, SaverError> {
        let name = name.trim().to_lowercase();
        Ok(self
            .read()?
            .goals
            .values()
            .find(|g| g.name.to_lowercase() == name)
            .cloned())
    }

    /// All goals in creation order
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, SaverError> {
        Ok(self.read()?.goals.values().cloned().collect())
    }

    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), SaverError> {
        let mut state = self.write()?;
        if goal.id >= state.next_id {
            state.next_id = goal.id.next();
        }
        state.goals.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal, returning it if it existed
    pub fn delete(&self, id: GoalId) -> Result<Option<SavingsGoal>, SaverError> {
        Ok(self.write()?.goals.remove(&id))
    }

    pub fn count(&self) -> Result<usize, SaverError> {
        Ok(self.read()?.goals.len())
    }
}
