//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The feature folder could not be created. Fatal to the call.
    #[error("Could not create feature folder {path}: {reason}")]
    FolderCreation { path: PathBuf, reason: String },

    /// The confirmation prompt itself failed (not a decline).
    #[error("Confirmation prompt failed: {reason}")]
    Prompt { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FolderCreation { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check write permissions on the features directory".into(),
            ],
            Self::Prompt { .. } => vec![
                "The interactive prompt could not be read".into(),
                "Re-run with --yes to skip confirmation".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::FolderCreation { .. } | Self::Prompt { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
