//! Pure placeholder substitution pipeline.
//!
//! Everything here is a function of (template text, slug, patterns) — no I/O,
//! no logging. The engine composes these; tests exercise them against
//! literal strings.
//!
//! ## Placeholders
//!
//! | Token | Replaced with |
//! |-------|---------------|
//! | `<FEATURE_NAME>` | the feature slug |
//! | `<IMPORT_PATH>` | the import-path pattern with `{feature}` → slug |
//!
//! Replacement is literal and total: every occurrence is rewritten, and no
//! attempt is made to understand the surrounding TypeScript.

use crate::domain::config::{FEATURE_TOKEN, TYPE_TOKEN};
use crate::domain::slug::{FeatureSlug, SuiteType};

/// Placeholder for the feature slug inside template text.
pub const FEATURE_NAME_PLACEHOLDER: &str = "<FEATURE_NAME>";

/// Placeholder for the relative import path back to the feature module.
pub const IMPORT_PATH_PLACEHOLDER: &str = "<IMPORT_PATH>";

/// Marker line templates may carry to pin where the TODO line goes.
pub const TODO_MARKER_TOKEN: &str = "// INSERT_TODO_MARKER_HERE";

/// Substitute both placeholders in a template body.
pub fn substitute_placeholders(
    template: &str,
    slug: &FeatureSlug,
    import_path_pattern: &str,
) -> String {
    let import_path = import_path_pattern.replace(FEATURE_TOKEN, slug.as_str());
    template
        .replace(FEATURE_NAME_PLACEHOLDER, slug.as_str())
        .replace(IMPORT_PATH_PLACEHOLDER, &import_path)
}

/// Materialize the TODO marker line for a feature.
pub fn materialize_marker(marker_template: &str, slug: &FeatureSlug) -> String {
    marker_template.replace(FEATURE_NAME_PLACEHOLDER, slug.as_str())
}

/// Place the materialized marker into the substituted content.
///
/// If any line trims to exactly [`TODO_MARKER_TOKEN`], every such line is
/// replaced by the marker. Otherwise the marker is appended as a trailing
/// line, preceded and followed by a newline. Either way the output contains
/// the marker at least once.
pub fn insert_todo_marker(content: &str, marker: &str) -> String {
    let has_token = content.lines().any(|line| line.trim() == TODO_MARKER_TOKEN);

    if !has_token {
        return format!("{content}\n{marker}\n");
    }

    let mut out: String = content
        .lines()
        .map(|line| {
            if line.trim() == TODO_MARKER_TOKEN {
                marker
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    // `lines()` swallows the final newline; keep the original's.
    if content.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Render the target file name from the naming pattern.
pub fn render_file_name(pattern: &str, slug: &FeatureSlug, suite: &SuiteType) -> String {
    pattern
        .replace(FEATURE_TOKEN, slug.as_str())
        .replace(TYPE_TOKEN, suite.as_str())
}

// ── tests ─────────────────────────────────────────────────────────────────────
