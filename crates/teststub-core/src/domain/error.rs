//! Domain-level errors (validation failures).

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The feature slug failed validation. No filesystem work was attempted.
    #[error("Invalid feature slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// The naming pattern cannot produce a usable file name.
    #[error("Invalid file naming pattern '{pattern}': {reason}")]
    InvalidNamingPattern { pattern: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSlug { slug, .. } => vec![
                format!("'{slug}' is not a valid feature slug"),
                "Use letters, digits, hyphens, and underscores only".into(),
                "Examples: checkout, user-profile, order_history".into(),
            ],
            Self::InvalidNamingPattern { .. } => vec![
                "The naming pattern must keep the {feature} and {type} tokens".into(),
                "Default: {feature}.{type}.test.ts".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSlug { .. } | Self::InvalidNamingPattern { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
