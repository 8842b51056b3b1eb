//! Command runner adapters.

mod scripted;
mod system;

pub use scripted::{RecordedCommand, ScriptedRunner};
pub use system::SystemCommandRunner;
