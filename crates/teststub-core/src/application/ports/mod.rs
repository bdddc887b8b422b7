//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `teststub-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StubResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `teststub_adapters::filesystem::LocalFilesystem` (production)
/// - `teststub_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The engine only ever needs this narrow surface; deletion and
///   permission handling are deliberately absent
/// - The exists-check-then-write pattern is not atomic — acceptable for a
///   developer-invoked, single-writer tool
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StubResult<()>;

    /// Read a file's full text content.
    fn read_to_string(&self, path: &Path) -> StubResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StubResult<()>;
}

/// Port for interactive yes/no confirmation.
///
/// Implemented by:
/// - `teststub_adapters::prompt::StdinConfirm` (production)
/// - `teststub_adapters::prompt::PresetConfirm` (testing / `--yes`)
///
/// The engine calls this at most once per invocation — only when the feature
/// folder is absent and dry-run is off.
pub trait Confirm: Send + Sync {
    /// Ask the user a yes/no question; `default` is the answer for empty
    /// input.
    fn confirm(&self, message: &str, default: bool) -> StubResult<bool>;
}
