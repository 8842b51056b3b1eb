//! Unified error handling for Aeon Core.
//!
//! Wraps domain and application errors behind one type that carries
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Aeon Core operations.
#[derive(Debug, Error, Clone)]
pub enum AeonError {
    /// Errors from the domain layer (rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl AeonError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// Output failed because stdout was closed by its reader.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_broken_pipe())
    }
}

/// Output sinks report `std::io::Error`, which is not `Clone`; keep the message.
impl From<std::io::Error> for AeonError {
    fn from(err: std::io::Error) -> Self {
        ApplicationError::OutputFailed {
            reason: err.to_string(),
            kind: err.kind(),
        }
        .into()
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    Internal,
}

/// Convenient result type alias.
pub type AeonResult<T> = Result<T, AeonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn io_errors_become_output_failures() {
        let err: AeonError = std::io::Error::other("broken pipe").into();
        assert!(matches!(
            err,
            AeonError::Application(ApplicationError::OutputFailed { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Environment);
    }

    #[test]
    fn filesystem_errors_suggest_permissions() {
        let err: AeonError = ApplicationError::FilesystemError {
            path: PathBuf::from("/readonly/app"),
            reason: "Permission denied".into(),
        }
        .into();
        assert!(err.to_string().contains("/readonly/app"));
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }

    #[test]
    fn closed_stdout_is_recognised() {
        let closed: AeonError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        let other: AeonError = std::io::Error::other("disk full").into();
        assert!(closed.is_broken_pipe());
        assert!(!other.is_broken_pipe());
    }
}
