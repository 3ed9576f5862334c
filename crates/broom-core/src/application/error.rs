//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No workspace folder was given.
    #[error("No workspace folder is open")]
    MissingWorkspace,

    /// The workspace folder does not exist.
    #[error("Workspace folder not found: {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// A command needs an argument the invocation did not carry.
    #[error("Command '{command}' requires a {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },

    /// No bound command has this id.
    #[error("Unknown command '{id}'")]
    UnknownCommand { id: String, available: Vec<String> },

    /// A shared adapter lock was poisoned.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MissingWorkspace => vec![
                "Run the command from a Flutter project folder".into(),
                "Or pass the folder with --workspace <DIR>".into(),
            ],
            Self::WorkspaceNotFound { path } => vec![
                format!("'{}' does not exist or is not a directory", path.display()),
                "Create the project first: flutter create <name>".into(),
            ],
            Self::MissingArgument { argument, .. } => {
                vec![format!("Provide the {argument} and try again")]
            }
            Self::UnknownCommand { available, .. } => {
                let mut suggestions = vec!["Registered commands:".to_string()];
                suggestions.extend(available.iter().map(|id| format!("  • {id}")));
                suggestions.push("List them any time with: broom plugins".into());
                suggestions
            }
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::MissingWorkspace | Self::MissingArgument { .. } => ErrorCategory::Validation,
            Self::WorkspaceNotFound { .. } | Self::UnknownCommand { .. } => ErrorCategory::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_lists_registered_ids() {
        let err = ApplicationError::UnknownCommand {
            id: "bloc.feature".into(),
            available: vec!["provider.feature".into(), "riverpod.feature".into()],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("provider.feature")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn missing_workspace_is_a_user_error() {
        assert_eq!(
            ApplicationError::MissingWorkspace.category(),
            ErrorCategory::Validation
        );
    }
}
