//! Error handling for the aeon-foundation binary.
//!
//! Every failure that reaches `main` becomes a [`CliError`], is logged, and
//! is printed to stderr as `✗ message` followed by suggestions. The process
//! then exits with status 1.

use std::error::Error as _;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use aeon_core::error::{AeonError, ErrorCategory as CoreCategory};

use crate::ui::palette;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file or variable could not be read.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `aeon-core`.
    #[error("{0}")]
    Core(#[from] AeonError),

    /// An I/O operation failed.
    #[error("{message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: format!("I/O error: {err}"),
            source: err,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Check the file named by AEON_CONFIG, or the default config.toml".into(),
                "AEON_DEFAULTS__* variables must hold valid values".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { source, .. } if source.kind() == std::io::ErrorKind::BrokenPipe => {
                vec!["The terminal or pipe was closed while writing".into()]
            }
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the current directory still exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Environment => ErrorCategory::Environment,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Environment,
        }
    }

    /// stdout was closed by its reader, e.g. `aeon-foundation info | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::IoError { source, .. } => source.kind() == std::io::ErrorKind::BrokenPipe,
            Self::Core(core) => core.is_broken_pipe(),
            Self::ConfigError { .. } => false,
        }
    }

    /// Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// `✗ message` in the error colour, suggestions dimmed.
    pub fn format_colored(&self) -> String {
        let mut out = format!(
            "\n  {} {}\n",
            "✗".color(palette::ERROR),
            self.to_string().color(palette::ERROR)
        );
        for suggestion in self.suggestions() {
            let _ = writeln!(out, "    {}", suggestion.dimmed());
        }
        out
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self) -> String {
        let mut out = format!("\n  ✗ {self}\n");
        for suggestion in self.suggestions() {
            let _ = writeln!(out, "    {suggestion}");
        }
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Environment => tracing::error!("Environment error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    Environment,
    Configuration,
    Internal,
}

/// Convert foreign errors into [`CliError`] with a context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeon_core::application::ApplicationError;
    use std::io;
    use std::path::PathBuf;

    fn filesystem_error() -> CliError {
        AeonError::from(ApplicationError::FilesystemError {
            path: PathBuf::from("/readonly/demo"),
            reason: "Failed to create directory: Permission denied".into(),
        })
        .into()
    }

    #[test]
    fn every_error_exits_with_one() {
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        let io_err: CliError = io::Error::other("gone").into();

        assert_eq!(config.exit_code(), 1);
        assert_eq!(io_err.exit_code(), 1);
        assert_eq!(filesystem_error().exit_code(), 1);
    }

    #[test]
    fn core_errors_keep_their_suggestions() {
        let err = filesystem_error();
        assert_eq!(err.category(), ErrorCategory::Environment);
        assert!(err.suggestions().iter().any(|s| s.contains("write permissions")));
    }

    #[test]
    fn plain_format_leads_with_cross() {
        let text = filesystem_error().format_plain();
        assert!(text.starts_with("\n  ✗ Filesystem error at /readonly/demo"));
        assert!(text.contains("    Check that you have write permissions\n"));
    }

    #[test]
    fn colored_format_uses_error_red() {
        let text = filesystem_error().format_colored();
        assert!(text.contains("38;2;239;68;68"));
    }

    #[test]
    fn anyhow_errors_become_config_errors() {
        let err: CliError = anyhow::anyhow!("bad toml").context("Failed to read configuration").into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn closed_pipe_is_detected_through_both_paths() {
        let direct: CliError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        let via_reporter: CliError = AeonError::from(io::Error::from(io::ErrorKind::BrokenPipe)).into();

        assert!(direct.is_broken_pipe());
        assert!(via_reporter.is_broken_pipe());
        assert!(!filesystem_error().is_broken_pipe());
        assert_eq!(
            direct.suggestions(),
            ["The terminal or pipe was closed while writing"]
        );
    }

    #[test]
    fn into_cli_attaches_context() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.with_cli_context(|| "Cannot read the current directory").unwrap_err();
        assert_eq!(err.to_string(), "Cannot read the current directory");
    }
}
