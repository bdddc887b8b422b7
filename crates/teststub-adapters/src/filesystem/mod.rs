//! Filesystem adapters.
//!
//! [`LocalFilesystem`] is the production implementation backed by `std::fs`;
//! [`MemoryFilesystem`] backs deterministic tests.

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
