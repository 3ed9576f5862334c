use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::{error::DomainError, strategy::WritePolicy};

/// Directories and files a generation step will materialize.
///
/// Paths are relative to `root` (the workspace). The plan holds no
/// behaviour beyond validation; services decide how to write it.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<PlannedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
    pub policy: WritePolicy,
}

impl GenerationPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String, policy: WritePolicy) {
        self.files.push(PlannedFile {
            path: path.into(),
            content,
            policy,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String, policy: WritePolicy) -> Self {
        self.add_file(path, content, policy);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// Every path must stay below the root and no file may appear twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        for dir in &self.directories {
            ensure_inside(dir)?;
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            ensure_inside(&file.path)?;
            if !seen.insert(file.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter()
    }

    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter()
    }
}

fn ensure_inside(path: &Path) -> Result<(), DomainError> {
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_) | Component::ParentDir));

    if escapes {
        return Err(DomainError::PathOutsideWorkspace {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
