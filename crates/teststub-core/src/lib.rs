//! Teststub Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Teststub
//! test-stub scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          teststub-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldEngine)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Filesystem, Confirm)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    teststub-adapters (Infrastructure)   │
//! │  (LocalFilesystem, StdinConfirm, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FeatureSlug, SuiteType, Substitution) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teststub_core::{
//!     application::ScaffoldEngine,
//!     domain::{ScaffoldConfig, ScaffoldOptions},
//! };
//!
//! // 1. Resolve configuration (file + defaults)
//! let config = ScaffoldConfig::default();
//!
//! // 2. Use application service (with injected adapters)
//! let engine = ScaffoldEngine::new(filesystem, confirm);
//! let report = engine.scaffold("checkout", &ScaffoldOptions::default(), &config).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldEngine,
        ports::{Confirm, Filesystem},
    };
    pub use crate::domain::{
        FeatureSlug, ScaffoldConfig, ScaffoldOptions, ScaffoldReport, SuiteType,
    };
    pub use crate::error::{StubError, StubResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
