//! Driven (output) ports - implemented by infrastructure.
//!
//! The `broom-adapters` crate provides implementations.

use std::path::Path;

use crate::error::BroomResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `broom_adapters::LocalFilesystem` (production)
/// - `broom_adapters::MemoryFilesystem` (testing)
///
/// There is no locking; a single writer per workspace is assumed.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BroomResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> BroomResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> BroomResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}
