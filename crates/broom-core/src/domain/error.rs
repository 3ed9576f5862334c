use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid feature name '{name}': {reason}")]
    InvalidFeatureName { name: String, reason: String },

    #[error("Unknown {category} '{option}'")]
    UnknownOption {
        category: &'static str,
        option: String,
        available: Vec<&'static str>,
    },

    // ========================================================================
    // Descriptor Errors (bugs in built-in templates)
    // ========================================================================
    #[error("Invalid locator pattern '{pattern}': {reason}")]
    InvalidLocator { pattern: String, reason: String },

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: PathBuf },

    #[error("Generated paths must stay inside the workspace: {path}")]
    PathOutsideWorkspace { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFeatureName { .. } => vec![
                "Feature names start with a letter".into(),
                "Use only letters, digits and underscores".into(),
                "Examples: home, user_profile, settings2".into(),
            ],
            Self::UnknownOption {
                category,
                available,
                ..
            } => {
                let mut suggestions = vec![format!("Accepted values for {category}:")];
                suggestions.extend(available.iter().map(|value| format!("  • {value}")));
                suggestions
            }
            Self::InvalidLocator { .. } | Self::DuplicatePath { .. } => vec![
                "A built-in template is malformed".into(),
                "Please report this issue".into(),
            ],
            Self::PathOutsideWorkspace { path } => vec![
                format!("'{}' is absolute or climbs out of the workspace", path.display()),
                "Check the [layout] section of your configuration".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFeatureName { .. }
            | Self::UnknownOption { .. }
            | Self::PathOutsideWorkspace { .. } => ErrorCategory::Validation,
            Self::InvalidLocator { .. } | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}
