//! Resolved scaffolding settings.
//!
//! [`ScaffoldConfig`] is the engine-facing view of configuration: every field
//! already has its final value. Loading and merging (file, defaults,
//! `--config` override) is the CLI layer's job; the core never reads files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::slug::SuiteType;

/// Token for the feature slug inside the naming and import-path patterns.
pub const FEATURE_TOKEN: &str = "{feature}";

/// Token for the suite type inside the naming pattern.
pub const TYPE_TOKEN: &str = "{type}";

/// Resolved settings for one scaffold invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory holding `<type>.test.template.ts` files.
    ///
    /// The CLI resolves this to an absolute path before the engine sees it;
    /// the engine treats it as opaque.
    pub template_dir: PathBuf,

    /// Output file naming pattern, containing the literal `{feature}` and
    /// `{type}` tokens.
    pub file_naming_pattern: String,

    /// Template for the TODO marker line; `<FEATURE_NAME>` is substituted
    /// with the slug.
    pub todo_marker_template: String,

    /// Suite types scaffolded when the invocation does not override them.
    pub default_suite_types: Vec<SuiteType>,

    /// Pattern for the `<IMPORT_PATH>` placeholder; `{feature}` is substituted
    /// with the slug. The default assumes the generated test sits two levels
    /// below the feature entry module.
    pub import_path_pattern: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates/tests/"),
            file_naming_pattern: "{feature}.{type}.test.ts".into(),
            todo_marker_template: "// TODO: write meaningful assertions for <FEATURE_NAME>".into(),
            default_suite_types: vec![
                SuiteType::new("unit"),
                SuiteType::new("integration"),
                SuiteType::new("a11y"),
                SuiteType::new("api"),
            ],
            import_path_pattern: "../../{feature}".into(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
