//! Service layer for Expense Saver
//!
//! Services validate input, update the repositories, persist them and
//! write the audit log. They play the part of the remote backend's
//! entry and goal operations.

pub mod entry;
pub mod goal;

pub use entry::{CreateEntryInput, EntryService, ImportSummary, UpdateEntryInput};
pub use goal::{CreateGoalInput, GoalService, UpdateGoalInput};
