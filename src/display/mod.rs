//! Display formatting for terminal output
//!
//! Tables for entries and savings goals, plus small formatting helpers.

pub mod entry;
pub mod goal;
pub mod report;

pub use entry::{format_entry_details, format_entry_table, truncate};
pub use goal::{format_goal_details, format_goal_table};
pub use report::{format_bar, format_percentage};
