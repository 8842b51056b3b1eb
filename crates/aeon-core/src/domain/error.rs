// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Parsing helpers on value objects return these; the CLI never surfaces the
/// parsing variants because unknown values fall back to defaults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown template '{value}'")]
    UnknownTemplate { value: String },

    #[error("Unknown package manager '{value}'")]
    UnknownPackageManager { value: String },

    // ========================================================================
    // Project structure invariants
    // ========================================================================
    #[error("Project structure for '{root}' is empty")]
    EmptyProject { root: String },

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { value } => vec![
                format!("'{}' is not a known template", value),
                "Available templates: minimal, full, edge-ai".into(),
            ],
            Self::UnknownPackageManager { value } => vec![
                format!("'{}' is not a supported package manager", value),
                "Supported: npm, bun, pnpm, yarn".into(),
            ],
            _ => vec!["The generated project layout is invalid; please report this issue".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } | Self::UnknownPackageManager { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}
