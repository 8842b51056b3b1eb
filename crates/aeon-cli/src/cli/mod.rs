//! Command-line surface: token parsing and command selection.

pub mod dispatch;
pub mod parser;

pub use dispatch::{Action, InitRequest};
pub use parser::ParsedInvocation;
