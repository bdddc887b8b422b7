//! Infrastructure adapters for Teststub.
//!
//! This crate implements the ports defined in
//! `teststub-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{PresetConfirm, StdinConfirm};
