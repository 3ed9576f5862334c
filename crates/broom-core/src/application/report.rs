//! What a command did, for display by the host.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{ManifestStatus, PatchOutcome};

/// Outcome of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryPatch {
    pub path: PathBuf,
    pub entry: String,
    pub outcome: PatchOutcome,
}

/// Everything a generation step touched, or would touch in a dry run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub dry_run: bool,
    pub directories: Vec<PathBuf>,
    pub created: Vec<PathBuf>,
    pub overwritten: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub registries: Vec<RegistryPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ManifestStatus>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another report's entries; `dry_run` is kept from `self`.
    pub fn merge(&mut self, other: GenerationReport) {
        self.directories.extend(other.directories);
        self.created.extend(other.created);
        self.overwritten.extend(other.overwritten);
        self.skipped.extend(other.skipped);
        self.registries.extend(other.registries);
        if other.manifest.is_some() {
            self.manifest = other.manifest;
        }
        self.warnings.extend(other.warnings);
    }

    pub fn patches_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a RegistryPatch> {
        self.registries.iter().filter(move |patch| patch.path == path)
    }

    /// Number of files written (or that would be written).
    pub fn files_written(&self) -> usize {
        self.created.len() + self.overwritten.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// The result channel of every plugin command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub notifications: Vec<Notification>,
    pub generation: GenerationReport,
}

impl CommandReport {
    /// A summary line followed by one warning per generation warning.
    pub fn new(command: impl Into<String>, summary: impl Into<String>, generation: GenerationReport) -> Self {
        let mut notifications = vec![Notification {
            level: NotificationLevel::Info,
            message: summary.into(),
        }];
        notifications.extend(generation.warnings.iter().map(|warning| Notification {
            level: NotificationLevel::Warning,
            message: warning.clone(),
        }));

        Self {
            command: command.into(),
            notifications,
            generation,
        }
    }

    pub fn summary(&self) -> &str {
        self.notifications
            .iter()
            .find(|n| n.level == NotificationLevel::Info)
            .map_or("", |n| n.message.as_str())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.notifications
            .iter()
            .filter(|n| n.level == NotificationLevel::Warning)
            .map(|n| n.message.as_str())
    }
}
