//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use broom_core::{
    application::{ApplicationError, ports::Filesystem},
    error::BroomResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file and its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> BroomResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)?;
        Ok(self)
    }

    /// Seed an empty directory.
    pub fn with_dir(self, path: impl AsRef<Path>) -> BroomResult<Self> {
        self.create_dir_all(path.as_ref())?;
        Ok(self)
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().ok()?.files.get(path.as_ref()).cloned()
    }

    /// Every file with its content, sorted by path.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.read()
            .map(|inner| inner.files.clone())
            .unwrap_or_default()
    }

    fn read(&self) -> BroomResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> BroomResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> BroomResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> BroomResult<()> {
        let mut inner = self.write()?;

        let orphan = path
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty() && !inner.directories.contains(parent));
        if orphan {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> BroomResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/ws/lib/main.dart"), "").is_err());

        fs.create_dir_all(Path::new("/ws/lib")).unwrap();
        fs.write_file(Path::new("/ws/lib/main.dart"), "void main() {}").unwrap();

        assert!(fs.is_dir(Path::new("/ws")));
        assert_eq!(fs.read_file("/ws/lib/main.dart").as_deref(), Some("void main() {}"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new().with_dir("/ws").unwrap();
        let other = fs.clone();

        other.create_dir_all(Path::new("/ws/lib")).unwrap();

        assert!(fs.exists(Path::new("/ws/lib")));
        assert!(!fs.is_dir(Path::new("/ws/pubspec.yaml")));
    }
}
