//! Core domain layer for Teststub.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (filesystem probes, template reads, the confirmation prompt) is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod config;
pub mod error;
pub mod report;
pub mod slug;
pub mod substitution;

// Re-exports for convenience
pub use config::ScaffoldConfig;
pub use error::DomainError;
pub use report::{ScaffoldOptions, ScaffoldReport};
pub use slug::{FeatureSlug, SuiteType};
