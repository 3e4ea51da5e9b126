//! User settings for Expense Saver
//!
//! Manages display and statement preferences: currency symbol, the UTC
//! offset used to place entries on calendar days, and the statement title.

use chrono::{FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

use super::paths::SaverPaths;
use crate::error::SaverError;

/// Largest accepted UTC offset magnitude, in minutes
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// User settings for Expense Saver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Fixed UTC offset in minutes used to resolve local days and months.
    /// When unset, the system's current local offset is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,

    /// Title printed at the top of exported statements
    #[serde(default = "default_statement_title")]
    pub statement_title: String,

    /// Default number of rows shown by `entry list`
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_statement_title() -> String {
    "EXPENSE SAVER STATEMENT".to_string()
}

fn default_list_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            utc_offset_minutes: None,
            statement_title: default_statement_title(),
            list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SaverPaths) -> Result<Self, SaverError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SaverError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SaverError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SaverPaths) -> Result<(), SaverError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SaverError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SaverError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values that cannot be used
    pub fn validate(&self) -> Result<(), SaverError> {
        if let Some(minutes) = self.utc_offset_minutes {
            if minutes.abs() > MAX_OFFSET_MINUTES {
                return Err(SaverError::Config(format!(
                    "utc_offset_minutes must be within +/-{}, got {}",
                    MAX_OFFSET_MINUTES, minutes
                )));
            }
        }

        if self.list_limit == 0 {
            return Err(SaverError::Config("list_limit must be at least 1".into()));
        }

        Ok(())
    }

    /// The offset used to turn entry timestamps into local calendar dates
    pub fn utc_offset(&self) -> FixedOffset {
        match self.utc_offset_minutes {
            Some(minutes) => FixedOffset::east_opt(minutes * 60).unwrap_or_else(|| Utc.fix()),
            None => Local::now().offset().fix(),
        }
    }
}
