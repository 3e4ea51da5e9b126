//! Path management for Expense Saver
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_SAVER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-saver` on Linux,
//!    `~/Library/Application Support/expense-saver` on macOS,
//!    `%APPDATA%\expense-saver` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SaverError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_SAVER_DATA_DIR";

/// Manages all paths used by Expense Saver
#[derive(Debug, Clone)]
pub struct SaverPaths {
    /// Base directory for all Expense Saver data
    base_dir: PathBuf,
}

impl SaverPaths {
    /// Create a new SaverPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, SaverError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SaverPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to entries.json
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("entries.json")
    }

    /// Get the path to goals.json
    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SaverError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaverError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SaverError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Expense Saver has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SaverError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| SaverError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("expense-saver"))
}
