//! Audit logging for Expense Saver
//!
//! Every create, update and delete of an entry or savings goal, and every
//! statement export, is appended to `audit.log` as one JSON object per line.
//!
//! - `AuditEntry`: one log line with timestamp, operation, entity and
//!   optional before/after values.
//! - `AuditLogger`: appends to and reads back the log file.
//! - `generate_diff`: human-readable summary of changed fields.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
