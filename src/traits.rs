//! Core traits for dependency injection and testability
//!
//! The resolver only ever looks at the project through these abstractions, so
//! tests can hand it an in-memory view of a directory instead of touching disk.

use std::path::Path;

/// Read-only view of the project directory
///
/// Errors while probing (permissions, unreadable entries, malformed patterns)
/// are reported as "does not exist".
pub trait ProjectProbe: Send + Sync {
    /// Whether `path`, relative to the project directory, exists
    fn exists(&self, path: &Path) -> bool;

    /// Whether any entry of the project directory matches the glob `pattern`
    fn pattern_exists(&self, pattern: &str) -> bool;
}
