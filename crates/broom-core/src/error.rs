//! Unified error handling for broom core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for broom core operations.
#[derive(Debug, Error, Clone)]
pub enum BroomError {
    /// Errors from the domain layer (validation, unknown options).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, missing input).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl BroomError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in broom".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BroomResult<T> = Result<T, BroomError>;
