//! Application services.

pub mod scaffold_engine;

pub use scaffold_engine::ScaffoldEngine;
