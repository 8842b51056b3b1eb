//! Command handlers.
//!
//! Each handler takes already-resolved arguments and an [`OutputManager`];
//! nothing here parses `argv`.
//!
//! [`OutputManager`]: crate::output::OutputManager

pub mod help;
pub mod info;
pub mod init;
pub mod welcome;

use aeon_core::domain::stack::FOUNDATION_PACKAGE;

pub const GITHUB_URL: &str = "https://github.com/affectively-ai/aeon-foundation";
pub const NPM_URL: &str = "https://npmjs.com/package/@affectively/aeon-foundation";
pub const WEBSITE_URL: &str = "https://affectively.ai";

/// `npm install @affectively/aeon-foundation`.
pub(crate) fn npm_install_line() -> String {
    format!("npm install {FOUNDATION_PACKAGE}")
}

/// `bun add @affectively/aeon-foundation`.
pub(crate) fn bun_add_line() -> String {
    format!("bun add {FOUNDATION_PACKAGE}")
}

/// Root import with the legacy `Auth` alias, as shown in help and welcome.
pub(crate) fn short_import_line() -> String {
    format!("import {{ Aeon, Pages, Dash, Edgework, Auth }} from '{FOUNDATION_PACKAGE}'")
}
