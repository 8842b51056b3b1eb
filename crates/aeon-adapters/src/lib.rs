//! Infrastructure adapters for aeon-foundation.
//!
//! Implements the ports defined in `aeon_core::application::ports`: the real
//! filesystem and child processes for the binary, in-memory stand-ins for
//! tests, and the renderer that produces the starter project.

pub mod filesystem;
pub mod renderer;
pub mod reporter;
pub mod runner;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::StarterRenderer;
pub use reporter::{RecordingReporter, ReportEvent};
pub use runner::{ScriptedRunner, SystemCommandRunner};
