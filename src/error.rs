//! Custom error types for Expense Saver
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Expense Saver operations
#[derive(Error, Debug)]
pub enum SaverError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failures reported by the entry backend
    #[error("Backend error: {0}")]
    Backend(String),
}

impl SaverError {
    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for savings goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Savings goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// A short message suitable for showing to the user.
    ///
    /// Backend failures carry raw transport text; those are mapped onto a
    /// small set of friendly messages. Everything else uses `Display`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(raw) => normalize_backend_message(raw),
            other => other.to_string(),
        }
    }
}

/// Map a raw backend failure onto a user-facing message
pub fn normalize_backend_message(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "An unknown error occurred. Please try again.".to_string();
    }

    if raw.contains("Actor not available") {
        return "Please wait for the app to finish loading, then try again.".to_string();
    }

    if raw.contains("Unauthorized") || raw.contains("unauthorized") {
        return "You are not authorized to perform this action. Please sign in and try again."
            .to_string();
    }

    if raw.contains("trap") || raw.contains("Reject") {
        if let Some(detail) = trap_detail(raw) {
            return detail;
        }
        return "An error occurred on the server. Please try again.".to_string();
    }

    if raw.contains("network") || raw.contains("fetch") {
        return "Network error. Please check your connection and try again.".to_string();
    }

    if raw.contains("identity") || raw.contains("authentication") {
        return "Authentication error. Please sign in again.".to_string();
    }

    if raw.chars().count() < 100 && !raw.contains("Error:") {
        return raw.to_string();
    }

    "An error occurred. Please try again.".to_string()
}

/// Text following a case-insensitive "trap" marker, up to end of line
fn trap_detail(raw: &str) -> Option<String> {
    let lower = raw.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(pos) = lower[search_from..].find("trap") {
        let after = search_from + pos + "trap".len();
        let rest = &raw[after..];

        // At least one separator is required after the keyword
        let trimmed = rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
        if trimmed.len() < rest.len() {
            let line = trimmed.lines().next().unwrap_or("").trim();
            if !line.is_empty() {
                return Some(line.to_string());
            }
        }

        search_from = after;
    }

    None
}

// Implement From traits for common error types

impl From<std::io::Error> for SaverError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaverError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Expense Saver operations
pub type SaverResult<T> = Result<T, SaverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaverError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SaverError::entry_not_found("42");
        assert_eq!(err.to_string(), "Entry not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let saver_err: SaverError = io_err.into();
        assert!(matches!(saver_err, SaverError::Io(_)));
    }

    #[test]
    fn test_backend_actor_message() {
        let err = SaverError::Backend("Actor not available".into());
        assert_eq!(
            err.user_message(),
            "Please wait for the app to finish loading, then try again."
        );
    }

    #[test]
    fn test_backend_trap_detail_extracted() {
        assert_eq!(
            normalize_backend_message("Canister trapped: trap: Entry does not exist\nmore"),
            "Entry does not exist"
        );
        assert_eq!(
            normalize_backend_message("Reject code 5"),
            "An error occurred on the server. Please try again."
        );
    }

    #[test]
    fn test_backend_fallbacks() {
        assert_eq!(
            normalize_backend_message("network down"),
            "Network error. Please check your connection and try again."
        );
        assert_eq!(normalize_backend_message("Something odd"), "Something odd");
        assert_eq!(
            normalize_backend_message("Error: something very specific"),
            "An error occurred. Please try again."
        );
        assert_eq!(
            normalize_backend_message(""),
            "An unknown error occurred. Please try again."
        );
    }

    #[test]
    fn test_non_backend_user_message_is_display() {
        let err = SaverError::Validation("Amount must be positive".into());
        assert_eq!(err.user_message(), "Validation error: Amount must be positive");
    }
}
