//! Feature slug and suite type value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Filesystem-safe identifier naming the feature unit tests are generated for.
///
/// A slug is non-empty and contains only ASCII alphanumerics, `-` and `_`.
/// Anything else (spaces, path separators, unicode) is rejected before any
/// filesystem work starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureSlug(String);

impl FeatureSlug {
    /// Parse and validate a raw slug string.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::InvalidSlug {
                slug: raw.to_string(),
                reason: "slug cannot be empty".into(),
            });
        }

        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::InvalidSlug {
                slug: raw.to_string(),
                reason: format!(
                    "character '{bad}' is not allowed; use letters, digits, '-' or '_'"
                ),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A category of test (e.g. `unit`, `integration`) mapped to one template
/// file and one output file.
///
/// The label is opaque to the engine: it only ever appears inside the
/// template file name (`{type}.test.template.ts`) and the output naming
/// pattern. Deserializes directly from the config's suite-type lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuiteType(String);

impl SuiteType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Template file name for this suite type, by naming convention.
    pub fn template_file_name(&self) -> String {
        format!("{}.test.template.ts", self.0)
    }
}

impl fmt::Display for SuiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SuiteType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
