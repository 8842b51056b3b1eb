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

    /// A child process could not be started or exited unsuccessfully.
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Project rendering failed.
    #[error("Project rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Writing to the terminal failed.
    #[error("Failed to write output: {reason}")]
    OutputFailed {
        reason: String,
        kind: std::io::ErrorKind,
    },
}

impl ApplicationError {
    /// The reader of stdout went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::OutputFailed {
                kind: std::io::ErrorKind::BrokenPipe,
                ..
            }
        )
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Make sure '{}' is installed and on your PATH", command),
            ],
            Self::OutputFailed { .. } => {
                vec!["The terminal or pipe was closed while writing".into()]
            }
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::CommandFailed { .. } | Self::OutputFailed { .. } => {
                ErrorCategory::Environment
            }
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
