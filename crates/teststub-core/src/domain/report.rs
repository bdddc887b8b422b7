//! Scaffold invocation options and the resulting report.

use std::path::PathBuf;

use crate::domain::slug::SuiteType;

/// Per-invocation overrides supplied by the caller (typically the CLI).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaffoldOptions {
    /// Compute and report intended effects without touching the filesystem.
    pub dry_run: bool,

    /// Overwrite generated files that already exist.
    pub force: bool,

    /// Accepted for compatibility; suite resolution already falls back to the
    /// configured defaults with or without it.
    pub all: bool,

    /// Suite types to scaffold. Empty means "no override" — the configured
    /// defaults apply — never "scaffold nothing".
    pub types: Vec<SuiteType>,

    /// Answer the folder-creation prompt affirmatively without asking.
    pub assume_yes: bool,
}

/// Outcome of one scaffold invocation.
///
/// `files_created` is the ground truth for what changed on disk — or, in
/// dry-run, what would have changed. Per-type skips and failures land in
/// `warnings` and never flip `success`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    /// False only when the user declined folder creation.
    pub success: bool,

    /// True only when the user declined folder creation.
    pub aborted: bool,

    /// Paths written (or, in dry-run, paths that would be written), in suite
    /// order.
    pub files_created: Vec<PathBuf>,

    /// The resolved feature folder, `features/<slug>`.
    pub feature_path: PathBuf,

    /// Suite types actually attempted, in order.
    pub suites: Vec<SuiteType>,

    /// Human-readable lines for skipped or failed suite types.
    pub warnings: Vec<String>,
}

impl ScaffoldReport {
    /// Report for a user-declined folder creation. No further steps ran.
    pub fn aborted(feature_path: PathBuf) -> Self {
        Self {
            success: false,
            aborted: true,
            files_created: Vec::new(),
            feature_path,
            suites: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
