//! Entry service
//!
//! Business logic for entries: validated create/update/delete, listing
//! through an `EntryFilter`, and importing backend-shaped entry dumps.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::analytics::{Dashboard, EntryFilter};
use crate::audit::{AuditEntry, EntityType};
use crate::error::{SaverError, SaverResult};
use crate::models::{
    categories_for, find_category, Entry, EntryId, EntryRecord, EntryType, Money, Timestamp,
};
use crate::storage::Storage;

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new entry
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    pub entry_type: EntryType,
    pub date: Timestamp,
    pub amount: Money,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Changes to apply to an existing entry; `None` leaves a field alone.
/// An empty category or note clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateEntryInput {
    pub entry_type: Option<EntryType>,
    pub date: Option<Timestamp>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries that did not exist before
    pub added: usize,
    /// Existing entries replaced by the imported version
    pub replaced: usize,
}

/// A backend `getEntries` dump: either the entry list or an error reply
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BackendReply {
    Entries(Vec<EntryRecord>),
    Failure { error: String },
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Canonical category for the entry type, or a validation error naming
    /// the accepted values
    fn resolve_category(
        entry_type: EntryType,
        category: Option<String>,
    ) -> SaverResult<Option<String>> {
        match non_empty(category) {
            None => Ok(None),
            Some(name) => find_category(entry_type, &name)
                .map(|c| Some(c.to_string()))
                .ok_or_else(|| {
                    SaverError::Validation(format!(
                        "Unknown {} category '{}'. Choose one of: {}",
                        entry_type.as_str(),
                        name,
                        categories_for(entry_type).join(", ")
                    ))
                }),
        }
    }

    fn check_amount(amount: Money) -> SaverResult<()> {
        if !amount.is_positive() {
            return Err(SaverError::Validation(format!(
                "Amount must be greater than zero, got {}",
                amount
            )));
        }
        if !amount.is_within_limit() {
            return Err(SaverError::Validation(format!(
                "Amount {} exceeds the limit of {}",
                amount,
                Money::MAX_AMOUNT
            )));
        }
        Ok(())
    }

    fn describe(entry: &Entry) -> Option<String> {
        Some(entry.to_string())
    }

    /// Create a new entry
    pub fn create(&self, input: CreateEntryInput) -> SaverResult<Entry> {
        Self::check_amount(input.amount)?;
        let category = Self::resolve_category(input.entry_type, input.category)?;

        let id = self.storage.entries.allocate_id()?;
        let mut entry = Entry::new(id, input.entry_type, input.date, input.amount);
        entry.category = category;
        entry.note = non_empty(input.note);

        entry
            .validate()
            .map_err(|e| SaverError::Validation(e.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        self.storage.log_create(
            EntityType::Entry,
            entry.id.to_string(),
            Self::describe(&entry),
            &entry,
        )?;

        Ok(entry)
    }

    pub fn get(&self, id: EntryId) -> SaverResult<Option<Entry>> {
        self.storage.entries.get(id)
    }

    /// Find an entry by ID string ("12" or "#12")
    pub fn find(&self, identifier: &str) -> SaverResult<Entry> {
        let id = identifier
            .parse::<EntryId>()
            .map_err(|_| SaverError::entry_not_found(identifier))?;
        self.get(id)?
            .ok_or_else(|| SaverError::entry_not_found(identifier))
    }

    /// All entries in creation order
    pub fn list_all(&self) -> SaverResult<Vec<Entry>> {
        self.storage.entries.get_all()
    }

    /// Entries matching a filter, in creation order
    pub fn list(&self, filter: &EntryFilter, offset: &FixedOffset) -> SaverResult<Vec<Entry>> {
        Ok(filter.apply(&self.list_all()?, offset))
    }

    /// Summary and category totals over the entries matching a filter
    pub fn dashboard(&self, filter: &EntryFilter, offset: &FixedOffset) -> SaverResult<Dashboard> {
        Ok(Dashboard::from_entries(&self.list(filter, offset)?))
    }

    /// Apply changes to an existing entry
    pub fn update(&self, id: EntryId, input: UpdateEntryInput) -> SaverResult<Entry> {
        let before = self
            .get(id)?
            .ok_or_else(|| SaverError::entry_not_found(id.to_string()))?;
        let mut entry = before.clone();

        if let Some(entry_type) = input.entry_type {
            entry.entry_type = entry_type;
        }
        if let Some(date) = input.date {
            entry.date = date;
        }
        if let Some(amount) = input.amount {
            Self::check_amount(amount)?;
            entry.amount = amount;
        }
        if let Some(note) = input.note {
            entry.note = non_empty(Some(note));
        }

        match input.category {
            Some(category) => {
                entry.category = Self::resolve_category(entry.entry_type, Some(category))?;
            }
            // Switching type with a category from the other list drops the category
            None if entry.entry_type != before.entry_type => {
                entry.category = entry
                    .category
                    .take()
                    .and_then(|c| find_category(entry.entry_type, &c))
                    .map(String::from);
            }
            None => {}
        }

        entry
            .validate()
            .map_err(|e| SaverError::Validation(e.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        self.storage.entries.save()?;

        self.storage.log_update(
            EntityType::Entry,
            entry.id.to_string(),
            Self::describe(&entry),
            &before,
            &entry,
            None,
        )?;

        Ok(entry)
    }

    /// Delete an entry
    pub fn delete(&self, id: EntryId) -> SaverResult<Entry> {
        let entry = self
            .storage
            .entries
            .delete(id)?
            .ok_or_else(|| SaverError::entry_not_found(id.to_string()))?;
        self.storage.entries.save()?;

        self.storage.log_delete(
            EntityType::Entry,
            entry.id.to_string(),
            Self::describe(&entry),
            &entry,
        )?;

        Ok(entry)
    }

    /// Import entries from a backend dump, keeping their IDs
    ///
    /// Entries whose ID already exists are replaced wholesale. Imported
    /// categories are kept as given. Nothing is written if any record is
    /// invalid.
    pub fn import_records(&self, records: Vec<EntryRecord>) -> SaverResult<ImportSummary> {
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let entry = record
                    .into_entry()
                    .map_err(|e| SaverError::Import(format!("record {}: {}", i + 1, e)))?;
                entry
                    .validate()
                    .map_err(|e| SaverError::Import(format!("record {}: {}", i + 1, e)))?;
                Ok(entry)
            })
            .collect::<SaverResult<Vec<Entry>>>()?;

        let mut summary = ImportSummary::default();
        let mut audit_entries = Vec::with_capacity(entries.len());

        for entry in entries {
            let id = entry.id.to_string();
            let name = Self::describe(&entry);
            match self.storage.entries.get(entry.id)? {
                Some(before) => {
                    summary.replaced += 1;
                    audit_entries.push(AuditEntry::update(
                        EntityType::Entry,
                        id,
                        name,
                        &before,
                        &entry,
                        Some("imported".to_string()),
                    ));
                }
                None => {
                    summary.added += 1;
                    audit_entries.push(AuditEntry::create(EntityType::Entry, id, name, &entry));
                }
            }
            self.storage.entries.upsert(entry)?;
        }

        self.storage.entries.save()?;
        self.storage.audit().log_batch(&audit_entries)?;

        Ok(summary)
    }

    /// Import from the JSON text of a backend dump
    ///
    /// The dump is either an array of entry records or an object of the
    /// form `{"error": "..."}` describing why the backend call failed.
    pub fn import_json(&self, json: &str) -> SaverResult<ImportSummary> {
        let reply: BackendReply = serde_json::from_str(json)
            .map_err(|e| SaverError::Import(format!("Unrecognized entry dump: {}", e)))?;

        match reply {
            BackendReply::Entries(records) => self.import_records(records),
            BackendReply::Failure { error } => Err(SaverError::Backend(error)),
        }
    }
}
