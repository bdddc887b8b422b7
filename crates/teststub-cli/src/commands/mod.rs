//! Command implementations.
//!
//! Each submodule owns one subcommand and exposes a single `execute`
//! function. Handlers translate CLI arguments into core calls and render
//! the results; no scaffolding logic lives here.

pub mod completions;
pub mod r#gen;
pub mod init;
pub mod list;
