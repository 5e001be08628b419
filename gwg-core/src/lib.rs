//! Core utilities and types for the gwg Go code generator.
//!
//! This crate owns the persistence boundary: everything that turns a
//! rendered text blob into a file on disk.

mod error;
mod file;
mod version;

pub use error::PersistenceError;
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use version::GoVersion;
