//! Scaffold inputs and results.

use std::path::PathBuf;

use crate::domain::{PackageManager, TemplateKind};

/// Project name used when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "my-aeon-app";

/// Options for a single `init` run.
///
/// Built by the CLI from the parsed invocation. Every field has a usable
/// default, so there is nothing to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub name: Option<String>,
    pub template: TemplateKind,
    pub skip_install: bool,
    pub package_manager: Option<PackageManager>,
}

impl ScaffoldOptions {
    /// Effective project name (empty names count as absent).
    pub fn project_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_PROJECT_NAME)
    }
}

/// What happened to the dependency install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped,
    Succeeded,
    Failed { reason: String },
}

/// Summary of a completed scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub name: String,
    pub root: PathBuf,
    pub template: TemplateKind,
    pub package_manager: PackageManager,
    pub files: Vec<String>,
    pub install: InstallOutcome,
}

/// Result of `init_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Target directory was already present; nothing was written.
    DirectoryExists { path: PathBuf },
    Created(ScaffoldReport),
}
