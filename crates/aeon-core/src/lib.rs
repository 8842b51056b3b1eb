//! Aeon Core - domain and application layers for the `aeon-foundation` CLI.
//!
//! The Aeon stack itself (sync coordinator, CRDT state, relay transport, edge
//! inference, UCAN auth, neural graph) lives in external packages. This crate
//! only *describes* those packages through a static registry and knows how to
//! scaffold a starter project that consumes them.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           aeon-cli (binary)             │
//! │   parser → dispatcher → commands        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, package detection)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Renderer,   │
//! │  Reporter)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      aeon-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aeon_core::{application::ScaffoldService, domain::ScaffoldOptions};
//!
//! let service = ScaffoldService::new(renderer, filesystem, runner);
//! let outcome = service.init_project(&ScaffoldOptions::default(), &cwd, &reporter)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, detect_package_manager,
        ports::{CommandRunner, Filesystem, ProjectRenderer, Reporter, TaskProgress},
    };
    pub use crate::domain::{
        InstallOutcome, PackageManager, ProjectStructure, STACK, ScaffoldOptions, ScaffoldOutcome,
        ScaffoldReport, StackPackage, TemplateKind,
    };
    pub use crate::error::{AeonError, AeonResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
