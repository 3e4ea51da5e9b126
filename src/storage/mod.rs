//! Storage layer for Expense Saver
//!
//! JSON file storage with atomic writes, plus the audit log that records
//! every change made through the services.

pub mod entries;
pub mod file_io;
pub mod goals;

pub use entries::EntryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SaverPaths;
use crate::error::SaverError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SaverPaths,
    pub entries: EntryRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a storage instance, creating directories as needed
    pub fn new(paths: SaverPaths) -> Result<Self, SaverError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SaverPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SaverError> {
        self.entries.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SaverError> {
        self.entries.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SaverError> {
        self.audit.log(&AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }

    /// Record an update; the diff summary is derived from the two states
    /// when the caller doesn't supply one
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), SaverError> {
        let diff_summary = diff_summary.or_else(|| {
            let before = serde_json::to_value(before).ok()?;
            let after = serde_json::to_value(after).ok()?;
            generate_diff(&before, &after)
        });

        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SaverError> {
        self.audit.log(&AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }

    /// Record a written document
    pub fn log_export<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        details: &T,
    ) -> Result<(), SaverError> {
        self.audit.log(&AuditEntry::export(
            entity_type,
            entity_id,
            entity_name,
            details,
        ))
    }
}
