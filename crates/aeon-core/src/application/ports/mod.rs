//! Application ports (traits) for external dependencies.
//!
//! Adapters in `aeon-adapters` and the CLI's output manager implement these.
//!
//! - `Filesystem`: directory and file creation
//! - `CommandRunner`: child processes (install, probes)
//! - `ProjectRenderer`: template kind to project structure
//! - `Reporter` / `TaskProgress`: user-facing progress lines

pub mod output;

pub use output::{CommandRunner, Filesystem, ProjectRenderer, Reporter, TaskProgress};
