//! Core domain layer for aeon-foundation.
//!
//! Pure data and rules: no filesystem, process, or terminal access. All I/O
//! goes through the ports in [`crate::application::ports`].

pub mod entities;
pub mod error;
pub mod options;
pub mod stack;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use error::DomainError;
pub use options::{
    DEFAULT_PROJECT_NAME, InstallOutcome, ScaffoldOptions, ScaffoldOutcome, ScaffoldReport,
};
pub use stack::{Accent, STACK, StackPackage};
pub use value_objects::{PackageManager, TemplateKind};
