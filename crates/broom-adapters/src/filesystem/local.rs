//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use broom_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BroomError, BroomResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> BroomResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BroomResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> BroomResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BroomError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("lib/core");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&nested.join("a.dart"), "class A {}").unwrap();

        assert!(fs.is_dir(&nested));
        assert_eq!(fs.read_to_string(&nested.join("a.dart")).unwrap(), "class A {}");
    }

    #[test]
    fn missing_file_maps_to_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("pubspec.yaml"))
            .unwrap_err();

        assert!(matches!(
            err,
            BroomError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(err.to_string().contains("Failed to read file"));
    }
}
