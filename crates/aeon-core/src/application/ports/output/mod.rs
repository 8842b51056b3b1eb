//! Driven (output) ports, implemented by infrastructure.
//!
//! The `aeon-adapters` crate provides the filesystem, runner and renderer
//! implementations; `aeon-cli` implements the reporter.

use std::io;
use std::path::Path;

use crate::domain::{ProjectStructure, TemplateKind};
use crate::error::AeonResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `aeon_adapters::filesystem::LocalFilesystem` (production)
/// - `aeon_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AeonResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> AeonResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running child processes.
///
/// Implemented by:
/// - `aeon_adapters::runner::SystemCommandRunner` (production)
/// - `aeon_adapters::runner::ScriptedRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `program arg` with all output discarded; `true` on exit status 0.
    ///
    /// Spawn failures count as `false`.
    fn probe(&self, program: &str, arg: &str) -> bool;

    /// Run `program args...` in `cwd` with output suppressed and wait for it.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> AeonResult<()>;
}

/// Port for turning a template kind into files.
pub trait ProjectRenderer: Send + Sync {
    /// Render the starter project `name` rooted at `root`.
    fn render(&self, name: &str, template: TemplateKind, root: &Path)
    -> AeonResult<ProjectStructure>;
}

/// Port for user-facing progress output.
///
/// Every method maps to one styled line (or block) in the terminal.
pub trait Reporter {
    /// Section header, e.g. `Scaffolding new Aeon Foundation project`.
    fn section(&self, title: &str) -> io::Result<()>;

    /// An in-progress step.
    fn step(&self, message: &str) -> io::Result<()>;

    /// A completed step with optional dimmed detail.
    fn done(&self, message: &str, detail: Option<&str>) -> io::Result<()>;

    /// A failed step with optional dimmed detail.
    fn fail(&self, message: &str, detail: Option<&str>) -> io::Result<()>;

    /// A dimmed hint line.
    fn note(&self, message: &str) -> io::Result<()>;

    /// Blank line.
    fn spacer(&self) -> io::Result<()>;

    /// Start a long-running task (rendered as a spinner on terminals).
    fn begin_task(&self, message: &str) -> io::Result<Box<dyn TaskProgress + '_>>;
}

/// Handle to a running task started by [`Reporter::begin_task`].
///
/// Dropping the handle without finishing it must release any timer it holds.
pub trait TaskProgress {
    fn succeed(self: Box<Self>, message: &str) -> io::Result<()>;

    fn fail(self: Box<Self>, message: &str) -> io::Result<()>;
}
