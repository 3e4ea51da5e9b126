//! Configuration module for Expense Saver
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SaverPaths;
pub use settings::Settings;
