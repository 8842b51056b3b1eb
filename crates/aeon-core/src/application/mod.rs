//! Application layer for aeon-foundation.
//!
//! - **Services**: use case orchestration (`ScaffoldService`, package detection)
//! - **Ports**: traits for the filesystem, child processes, rendering and output
//! - **Errors**: orchestration failures
//!
//! Business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldService, detect_package_manager};

pub use ports::{CommandRunner, Filesystem, ProjectRenderer, Reporter, TaskProgress};

pub use error::ApplicationError;
